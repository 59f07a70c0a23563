//! Spawn scheduling system — admits one monster per due spawn tick.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use specter_core::components::Monster;
use specter_core::constants::{POPULATION_CAP, SPAWN_INTERVAL_TICKS};

/// Spawn one monster on each due tick. At the population cap the tick is
/// a no-op — not an error, not queued for later.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u64, current_tick: u64) {
    if current_tick == 0 || !current_tick.is_multiple_of(SPAWN_INTERVAL_TICKS) {
        return;
    }

    let population = {
        let mut query = world.query::<&Monster>();
        query.iter().count()
    };
    if population >= POPULATION_CAP {
        return;
    }

    crate::world_setup::spawn_monster(world, rng, next_id);
}
