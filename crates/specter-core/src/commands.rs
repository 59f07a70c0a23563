//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, before any
//! system runs. A command whose precondition fails is silently ignored —
//! the UI stays permissive, nothing is surfaced as an error.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a play session: reset score, clear monsters, refill the magazine.
    StartSession,
    /// End the session and report the final score.
    EndSession,
    /// Fire at a point in normalized [0,100]×[0,100] surface coordinates.
    Shoot { x: f64, y: f64 },
    /// Begin a timed reload. No-op while reloading or at full magazine.
    Reload,
    /// Update the aim indicator. Visual feedback only, no gameplay effect.
    MoveAim { x: f64, y: f64 },
    /// Select the weapon profile for subsequent sessions. Idle only, so a
    /// running session keeps one stat profile for its whole duration.
    EquipWeapon { kind: WeaponKind },
}
