//! Control surface bridging an embedding UI to the loop thread.
//!
//! These functions mirror what a frontend would invoke: start/stop the
//! loop, forward player commands, and poll state synchronously.

use specter_core::commands::PlayerCommand;
use specter_core::state::EncounterSnapshot;
use specter_progression::PlayerProfile;
use specter_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{HostState, LoopCommand};

/// Start the encounter loop. Spawns the loop thread if not already running.
pub fn start<F>(state: &HostState, config: SimConfig, on_snapshot: F) -> Result<(), String>
where
    F: Fn(&EncounterSnapshot) + Send + 'static,
{
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Encounter loop already running".into());
    }

    let cmd_tx = game_loop::spawn_encounter_loop(
        config,
        state.latest_snapshot.clone(),
        state.profile.clone(),
        on_snapshot,
    );

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(())
}

/// Send a player command to the encounter loop.
pub fn send_command(state: &HostState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(LoopCommand::Player(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Encounter loop not started".into()),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &HostState) -> Result<Option<EncounterSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Get a copy of the current player profile.
pub fn get_profile(state: &HostState) -> Result<PlayerProfile, String> {
    let lock = state.profile.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Shut down the loop thread gracefully.
pub fn shutdown(state: &HostState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    if !*running {
        return Err("Encounter loop not running".into());
    }

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    if let Some(tx) = tx_lock.take() {
        let _ = tx.send(LoopCommand::Shutdown);
    }
    *running = false;

    Ok(())
}
