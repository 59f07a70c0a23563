//! Player progression for SPECTER.
//!
//! Owns the coins/experience/kills ledger and weapon ownership. The
//! encounter engine never reads this state; it only reports kill rewards,
//! which the host layer applies here.

pub mod profile;

pub use profile::PlayerProfile;
pub use specter_core as core;
