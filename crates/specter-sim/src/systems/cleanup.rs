//! Cleanup system: removes monsters that have fallen out of play.
//!
//! Runs after movement within the same tick, so a monster that crosses
//! the threshold this tick is removed this tick, not next tick.

use hecs::{Entity, World};

use specter_core::components::Monster;
use specter_core::constants::DESPAWN_Y;
use specter_core::types::Position;

/// Remove monsters at or past the despawn line. Reaching the bottom is an
/// exit from play, not a loss condition — no score or penalty effect.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, _monster)) in world.query_mut::<(&Position, &Monster)>() {
        if pos.y >= DESPAWN_Y {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
