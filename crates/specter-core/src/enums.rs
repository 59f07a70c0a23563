//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session phase. Spawn and movement ticks run only while Active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No session in progress; the world is empty.
    #[default]
    Idle,
    /// A play session is running.
    Active,
}

/// Weapon archetype in the arsenal catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Starter sidearm, owned from the first launch.
    #[default]
    Pistol,
    /// Close-range burst damage, small magazine.
    Shotgun,
    /// High rate of fire, low per-shot damage.
    Smg,
    /// Balanced automatic rifle.
    Rifle,
    /// One shot, one kill; tiny magazine.
    Sniper,
    /// Area damage, slowest to cycle.
    Launcher,
}

impl WeaponKind {
    /// All catalog entries in shop display order.
    pub const ALL: [WeaponKind; 6] = [
        WeaponKind::Pistol,
        WeaponKind::Shotgun,
        WeaponKind::Smg,
        WeaponKind::Rifle,
        WeaponKind::Sniper,
        WeaponKind::Launcher,
    ];
}

/// Catalog rarity tier, used for shop presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}
