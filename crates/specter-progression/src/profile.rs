use serde::{Deserialize, Serialize};

use specter_arsenal::profiles::get_profile;
use specter_core::constants::{EXPERIENCE_PER_LEVEL, STARTING_COINS};
use specter_core::enums::WeaponKind;
use specter_core::events::KillReward;

/// The player's progression state: currency, experience, kill count, and
/// weapon ownership. Lives for the application lifetime; not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub coins: u32,
    pub level: u32,
    pub experience: u32,
    pub kills: u32,
    pub owned_weapons: Vec<WeaponKind>,
    /// Weapon selected for the next session.
    pub equipped: WeaponKind,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            coins: STARTING_COINS,
            level: 1,
            experience: 0,
            kills: 0,
            owned_weapons: vec![WeaponKind::Pistol],
            equipped: WeaponKind::Pistol,
        }
    }
}

impl PlayerProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one kill reward reported by the encounter engine.
    /// Level is derived from total experience.
    pub fn apply_reward(&mut self, reward: &KillReward) {
        self.kills += reward.kills;
        self.experience += reward.experience;
        self.coins += reward.coins;
        self.level = 1 + self.experience / EXPERIENCE_PER_LEVEL;
    }

    pub fn owns(&self, kind: WeaponKind) -> bool {
        self.owned_weapons.contains(&kind)
    }

    /// Check if a weapon can be bought with the current balance.
    pub fn can_purchase(&self, kind: WeaponKind) -> bool {
        !self.owns(kind) && self.coins >= get_profile(kind).price
    }

    /// Buy a weapon. Returns the cost, or an error.
    pub fn purchase(&mut self, kind: WeaponKind) -> Result<u32, String> {
        if self.owns(kind) {
            return Err("Weapon already owned".into());
        }
        let price = get_profile(kind).price;
        if self.coins < price {
            return Err(format!(
                "Insufficient coins: have {}, need {}",
                self.coins, price
            ));
        }
        self.coins -= price;
        self.owned_weapons.push(kind);
        Ok(price)
    }

    /// Equip an owned weapon for the next session.
    pub fn equip(&mut self, kind: WeaponKind) -> Result<(), String> {
        if !self.owns(kind) {
            return Err("Weapon not owned".into());
        }
        self.equipped = kind;
        Ok(())
    }
}
