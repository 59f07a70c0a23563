//! Systems that operate on the encounter world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! is passed in from the engine.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod reload;
pub mod snapshot;
pub mod spawner;
