//! Descent integration system.
//!
//! Each tick every monster drifts downward by its fall speed. Fall speeds
//! are expressed in percent-of-height per tick, so no dt scaling applies.

use hecs::World;

use specter_core::components::FallSpeed;
use specter_core::types::Position;

/// Advance every monster's vertical position by its fall speed.
pub fn run(world: &mut World) {
    for (_entity, (pos, speed)) in world.query_mut::<(&mut Position, &FallSpeed)>() {
        pos.y += speed.0;
    }
}
