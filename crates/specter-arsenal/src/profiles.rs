//! Kind-specific weapon profiles.
//!
//! Consolidates per-weapon parameters for the shop and the encounter
//! engine. Fire rate and accuracy are shop display data only; the engine
//! reads damage and magazine size.

use serde::Serialize;

use specter_core::enums::{Rarity, WeaponKind};

/// Stat profile for a weapon kind. Serialized as-is for shop display;
/// never deserialized (the table is the single source of truth).
#[derive(Debug, Clone, Serialize)]
pub struct WeaponProfile {
    pub kind: WeaponKind,
    /// Shop display name.
    pub name: &'static str,
    /// Purchase price in coins. 0 = owned from the start.
    pub price: u32,
    /// Health removed per landed shot.
    pub damage: f64,
    /// Shots per second (display only).
    pub fire_rate: u32,
    /// Percent accuracy rating (display only).
    pub accuracy: u32,
    /// Magazine size; the session's ammo ceiling.
    pub magazine: u32,
    pub rarity: Rarity,
    /// One-line shop blurb.
    pub description: &'static str,
}

/// Get the profile for a given weapon kind.
pub fn get_profile(kind: WeaponKind) -> WeaponProfile {
    match kind {
        WeaponKind::Pistol => WeaponProfile {
            kind,
            name: "M9 Pistol",
            price: 0,
            damage: 25.0,
            fire_rate: 3,
            accuracy: 85,
            magazine: 15,
            rarity: Rarity::Common,
            description: "Standard issue. Reliable and accurate.",
        },
        WeaponKind::Shotgun => WeaponProfile {
            kind,
            name: "Shotgun",
            price: 500,
            damage: 75.0,
            fire_rate: 1,
            accuracy: 60,
            magazine: 8,
            rarity: Rarity::Rare,
            description: "Heavy damage at close range.",
        },
        WeaponKind::Smg => WeaponProfile {
            kind,
            name: "Submachine Gun",
            price: 800,
            damage: 20.0,
            fire_rate: 12,
            accuracy: 75,
            magazine: 40,
            rarity: Rarity::Rare,
            description: "Overwhelming rate of fire for suppression.",
        },
        WeaponKind::Rifle => WeaponProfile {
            kind,
            name: "Assault Rifle",
            price: 1200,
            damage: 35.0,
            fire_rate: 8,
            accuracy: 90,
            magazine: 30,
            rarity: Rarity::Epic,
            description: "High rate of fire and accuracy.",
        },
        WeaponKind::Sniper => WeaponProfile {
            kind,
            name: "Sniper Rifle",
            price: 2000,
            damage: 100.0,
            fire_rate: 1,
            accuracy: 99,
            magazine: 5,
            rarity: Rarity::Legendary,
            description: "Maximum damage. One shot, one kill.",
        },
        WeaponKind::Launcher => WeaponProfile {
            kind,
            name: "Grenade Launcher",
            price: 3500,
            damage: 200.0,
            fire_rate: 1,
            accuracy: 70,
            magazine: 3,
            rarity: Rarity::Legendary,
            description: "Explosive damage. Destroys everything.",
        },
    }
}

/// The full catalog in shop display order.
pub fn catalog() -> Vec<WeaponProfile> {
    WeaponKind::ALL.iter().map(|&k| get_profile(k)).collect()
}
