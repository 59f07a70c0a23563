//! Encounter snapshot — the complete visible state sent to the frontend
//! each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{SessionPhase, WeaponKind};
use crate::events::{FeedbackEvent, KillReward};
use crate::types::{Position, SimTime};

/// Complete encounter state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    /// Active monsters, sorted by id (spawn order).
    pub monsters: Vec<MonsterView>,
    pub score: u32,
    pub ammo: u32,
    pub magazine_size: u32,
    pub reloading: bool,
    /// Last known aim position, for the crosshair overlay.
    pub crosshair: Position,
    /// Weapon profile the session is using.
    pub weapon: WeaponKind,
    /// Feedback events raised this tick (drained from the engine).
    pub feedback: Vec<FeedbackEvent>,
    /// Kill rewards raised this tick, for the progression store.
    pub rewards: Vec<KillReward>,
}

/// A visible monster on the play surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonsterView {
    pub id: u64,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    /// Remaining health as a 0..=1 ratio for the health bar.
    pub health_ratio: f64,
    /// Downward drift in percent-of-height per tick.
    pub speed: f64,
}
