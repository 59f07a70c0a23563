//! Loadout and score data models — engine-owned state, NOT ECS entities.

use specter_arsenal::profiles::WeaponProfile;

/// Magazine state for the equipped weapon.
#[derive(Debug, Clone)]
pub struct Loadout {
    /// Rounds remaining. Always in `0..=magazine_size`.
    pub ammo: u32,
    /// The ammo ceiling, from the weapon profile.
    pub magazine_size: u32,
    /// Health removed per landed shot, from the weapon profile.
    pub damage: f64,
    /// Tick at which the in-flight reload completes. `None` = not reloading.
    /// Cleared on session end so a stray restore can never land afterward.
    pub reload_done_tick: Option<u64>,
}

impl Loadout {
    /// Build a full loadout from a weapon profile.
    pub fn from_profile(profile: &WeaponProfile) -> Self {
        Self {
            ammo: profile.magazine,
            magazine_size: profile.magazine,
            damage: profile.damage,
            reload_done_tick: None,
        }
    }

    pub fn reloading(&self) -> bool {
        self.reload_done_tick.is_some()
    }

    /// Restore the magazine to capacity.
    pub fn refill(&mut self) {
        self.ammo = self.magazine_size;
    }
}

/// Running score state tracked by the engine, reset each session.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    /// Session score (kill rewards only; despawns score nothing).
    pub score: u32,
    pub monsters_killed: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
}
