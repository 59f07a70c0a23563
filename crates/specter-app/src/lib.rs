//! SPECTER host application.
//!
//! Wires the encounter engine to an embedding UI: runs the loop thread,
//! forwards player commands, publishes snapshots, and applies kill
//! rewards to the player profile.

pub mod control;
pub mod game_loop;
pub mod state;

pub use specter_core as core;
