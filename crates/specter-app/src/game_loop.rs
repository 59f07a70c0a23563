//! Encounter loop thread — runs the engine at 20Hz and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots go to a sink
//! callback and are stored in shared state for synchronous polling; kill
//! rewards are applied to the shared player profile as they arrive.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use specter_core::constants::TICK_RATE;
use specter_core::state::EncounterSnapshot;
use specter_progression::PlayerProfile;
use specter_sim::engine::{EncounterEngine, SimConfig};

use crate::state::LoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the encounter loop in a new thread.
///
/// Returns the command sender for the control surface to use.
pub fn spawn_encounter_loop<F>(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<EncounterSnapshot>>>,
    profile: Arc<Mutex<PlayerProfile>>,
    on_snapshot: F,
) -> mpsc::Sender<LoopCommand>
where
    F: Fn(&EncounterSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("specter-encounter-loop".into())
        .spawn(move || {
            run_encounter_loop(config, cmd_rx, &latest_snapshot, &profile, on_snapshot);
        })
        .expect("Failed to spawn encounter loop thread");

    cmd_tx
}

/// The encounter loop. Runs until Shutdown command or channel disconnect.
fn run_encounter_loop<F>(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<EncounterSnapshot>>,
    profile: &Mutex<PlayerProfile>,
    on_snapshot: F,
) where
    F: Fn(&EncounterSnapshot),
{
    let mut engine = EncounterEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles idle semantics internally)
        let snapshot = engine.tick();

        // 3. Apply kill rewards to the progression store
        if !snapshot.rewards.is_empty() {
            if let Ok(mut profile) = profile.lock() {
                for reward in &snapshot.rewards {
                    profile.apply_reward(reward);
                }
            }
        }

        // 4. Emit snapshot to the sink
        on_snapshot(&snapshot);

        // 5. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 6. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
