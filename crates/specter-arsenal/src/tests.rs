#[cfg(test)]
mod tests {
    use specter_core::enums::{Rarity, WeaponKind};

    use crate::profiles::{catalog, get_profile};

    #[test]
    fn test_catalog_covers_every_kind() {
        let cat = catalog();
        assert_eq!(cat.len(), WeaponKind::ALL.len());
        for kind in WeaponKind::ALL {
            assert!(cat.iter().any(|w| w.kind == kind));
        }
    }

    #[test]
    fn test_pistol_is_the_free_starter() {
        let pistol = get_profile(WeaponKind::Pistol);
        assert_eq!(pistol.price, 0);
        assert_eq!(pistol.rarity, Rarity::Common);

        // Every other weapon costs coins.
        for kind in WeaponKind::ALL {
            if kind != WeaponKind::Pistol {
                assert!(get_profile(kind).price > 0, "{kind:?} should have a price");
            }
        }
    }

    /// The rifle carries the encounter engine's reference loadout:
    /// 35 damage, 30-round magazine.
    #[test]
    fn test_rifle_reference_loadout() {
        let rifle = get_profile(WeaponKind::Rifle);
        assert_eq!(rifle.damage, 35.0);
        assert_eq!(rifle.magazine, 30);
    }

    #[test]
    fn test_profiles_are_sane() {
        for w in catalog() {
            assert!(w.damage > 0.0);
            assert!(w.magazine > 0);
            assert!(w.fire_rate > 0);
            assert!(w.accuracy <= 100);
            assert!(!w.name.is_empty());
            assert!(!w.description.is_empty());
        }
    }

    /// Price should broadly track rarity tier.
    #[test]
    fn test_legendary_costs_more_than_rare() {
        let cheapest_legendary = catalog()
            .into_iter()
            .filter(|w| w.rarity == Rarity::Legendary)
            .map(|w| w.price)
            .min()
            .unwrap();
        let priciest_rare = catalog()
            .into_iter()
            .filter(|w| w.rarity == Rarity::Rare)
            .map(|w| w.price)
            .max()
            .unwrap();
        assert!(cheapest_legendary > priciest_rare);
    }
}
