//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the play surface, in normalized percent coordinates.
/// x grows rightward, y grows downward; (0, 0) is the top-left corner and
/// (100, 100) the bottom-right. Spawn jitter may place x slightly outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of the play surface — the crosshair's rest position.
    pub fn center() -> Self {
        Self { x: 50.0, y: 50.0 }
    }

    /// Normalize a pixel coordinate against the play surface's bounding
    /// box (origin at the box's top-left corner).
    pub fn from_pixels(px: f64, py: f64, width: f64, height: f64) -> Self {
        Self {
            x: px / width * 100.0,
            y: py / height * 100.0,
        }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position, in percent units.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
