//! Entity spawn factory for the encounter world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use specter_core::components::{FallSpeed, Health, Monster, MonsterId};
use specter_core::constants::*;
use specter_core::types::Position;

/// Spawn a single monster near the top of the play surface with randomized
/// horizontal placement and fall speed.
pub fn spawn_monster(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u64) -> hecs::Entity {
    let x = rng.gen_range(SPAWN_X_MIN..SPAWN_X_MAX);
    let y = rng.gen_range(SPAWN_Y_MIN..SPAWN_Y_MAX);
    let speed = rng.gen_range(FALL_SPEED_MIN..FALL_SPEED_MAX);
    spawn_monster_at(world, next_id, Position::new(x, y), speed)
}

/// Spawn a monster with exact placement (scripted scenarios and tests).
pub fn spawn_monster_at(
    world: &mut World,
    next_id: &mut u64,
    position: Position,
    speed: f64,
) -> hecs::Entity {
    let id = MonsterId(*next_id);
    *next_id += 1;

    world.spawn((
        Monster,
        id,
        position,
        Health::full(MONSTER_MAX_HEALTH),
        FallSpeed(speed),
    ))
}
