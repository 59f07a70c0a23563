//! Snapshot system: queries the ECS world and builds a complete
//! EncounterSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use specter_core::components::{FallSpeed, Health, MonsterId};
use specter_core::enums::{SessionPhase, WeaponKind};
use specter_core::events::{FeedbackEvent, KillReward};
use specter_core::state::{EncounterSnapshot, MonsterView};
use specter_core::types::{Position, SimTime};

use crate::loadout::{Loadout, ScoreState};

/// Build a complete EncounterSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SessionPhase,
    weapon: WeaponKind,
    crosshair: Position,
    loadout: &Loadout,
    score: &ScoreState,
    feedback: Vec<FeedbackEvent>,
    rewards: Vec<KillReward>,
) -> EncounterSnapshot {
    EncounterSnapshot {
        time: *time,
        phase,
        monsters: build_monsters(world),
        score: score.score,
        ammo: loadout.ammo,
        magazine_size: loadout.magazine_size,
        reloading: loadout.reloading(),
        crosshair,
        weapon,
        feedback,
        rewards,
    }
}

/// Build the MonsterView list, sorted by spawn id.
fn build_monsters(world: &World) -> Vec<MonsterView> {
    let mut monsters: Vec<MonsterView> = world
        .query::<(&MonsterId, &Position, &Health, &FallSpeed)>()
        .iter()
        .map(|(_, (id, pos, health, speed))| MonsterView {
            id: id.0,
            position: *pos,
            health: health.current,
            max_health: health.max,
            health_ratio: health.ratio(),
            speed: speed.0,
        })
        .collect();

    monsters.sort_by_key(|m| m.id);
    monsters
}
