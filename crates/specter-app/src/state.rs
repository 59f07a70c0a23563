//! Host state shared between the control surface and the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use specter_core::commands::PlayerCommand;
use specter_core::state::EncounterSnapshot;
use specter_progression::PlayerProfile;

/// Commands sent from the control surface to the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A player command to forward to the encounter engine.
    Player(PlayerCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// Everything here is Send + Sync:
/// - `mpsc::Sender` wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that may not exist before `start`
/// - `Arc<Mutex<...>>` for values shared with the loop thread
pub struct HostState {
    /// Channel sender to forward commands to the loop thread.
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<EncounterSnapshot>>>,
    /// Progression store the loop thread applies kill rewards to.
    pub profile: Arc<Mutex<PlayerProfile>>,
    /// Whether the loop thread is currently running.
    pub running: Mutex<bool>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            profile: Arc::new(Mutex::new(PlayerProfile::default())),
            running: Mutex::new(false),
        }
    }
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }
}
