//! Events emitted by the simulation for UI feedback and progression.

use serde::{Deserialize, Serialize};

use crate::constants::{REWARD_COINS, REWARD_EXPERIENCE, REWARD_KILLS};

/// Transient feedback events for the frontend. Purely informational;
/// nothing downstream depends on them for correctness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// A session began.
    SessionStarted,
    /// A shot damaged a monster without destroying it.
    Hit {
        monster_id: u64,
        health_remaining: f64,
    },
    /// A shot hit nothing. Ammo was still spent.
    Miss { x: f64, y: f64 },
    /// A shot destroyed a monster.
    Kill { monster_id: u64, score_award: u32 },
    /// A reload began; shooting is blocked until it completes.
    ReloadStarted,
    /// The magazine was restored.
    ReloadComplete,
    /// The session ended with this final score.
    SessionEnded { score: u32 },
}

/// Reward deltas reported to the progression store, exactly once per
/// monster destroyed. The engine only ever writes these; it never reads
/// progression state back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillReward {
    pub kills: u32,
    pub experience: u32,
    pub coins: u32,
}

impl Default for KillReward {
    fn default() -> Self {
        Self {
            kills: REWARD_KILLS,
            experience: REWARD_EXPERIENCE,
            coins: REWARD_COINS,
        }
    }
}
