//! Encounter engine for SPECTER.
//!
//! Owns the hecs ECS world of active monsters, runs systems at a fixed
//! tick rate, and produces EncounterSnapshots for the frontend.

pub mod engine;
pub mod loadout;
pub mod systems;
pub mod world_setup;

pub use engine::EncounterEngine;
pub use specter_core as core;
