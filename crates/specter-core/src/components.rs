//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Marks an entity as an active monster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Monster;

/// Unique monster identity, monotonic within a session.
/// The lowest id wins when several monsters fall inside one shot's radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u64);

/// Current and spawn-time health. `max` never changes after spawn; it is
/// only read for the health-bar ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }

    /// Remaining health as a 0..=1 ratio for the health bar.
    pub fn ratio(&self) -> f64 {
        (self.current / self.max).clamp(0.0, 1.0)
    }
}

/// Constant downward drift in percent-of-height per tick, fixed at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FallSpeed(pub f64);
