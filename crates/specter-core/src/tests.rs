#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::Health;
    use crate::constants::{DT, RELOAD_DURATION_TICKS, SPAWN_INTERVAL_TICKS, TICK_RATE};
    use crate::enums::*;
    use crate::events::{FeedbackEvent, KillReward};
    use crate::state::EncounterSnapshot;
    use crate::types::{Position, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_session_phase_serde() {
        let variants = vec![SessionPhase::Idle, SessionPhase::Active];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SessionPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_weapon_kind_serde() {
        for v in WeaponKind::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartSession,
            PlayerCommand::EndSession,
            PlayerCommand::Shoot { x: 50.0, y: 50.0 },
            PlayerCommand::Reload,
            PlayerCommand::MoveAim { x: 12.5, y: 80.0 },
            PlayerCommand::EquipWeapon {
                kind: WeaponKind::Sniper,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify FeedbackEvent round-trips through serde.
    #[test]
    fn test_feedback_event_serde() {
        let events = vec![
            FeedbackEvent::SessionStarted,
            FeedbackEvent::Hit {
                monster_id: 3,
                health_remaining: 65.0,
            },
            FeedbackEvent::Miss { x: 50.0, y: 50.0 },
            FeedbackEvent::Kill {
                monster_id: 3,
                score_award: 100,
            },
            FeedbackEvent::ReloadStarted,
            FeedbackEvent::ReloadComplete,
            FeedbackEvent::SessionEnded { score: 400 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: FeedbackEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// The default reward carries the reference deltas.
    #[test]
    fn test_kill_reward_reference_deltas() {
        let reward = KillReward::default();
        assert_eq!(reward.kills, 1);
        assert_eq!(reward.experience, 50);
        assert_eq!(reward.coins, 10);
    }

    /// Verify EncounterSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = EncounterSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: EncounterSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position distance math.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_position_from_pixels() {
        // A tap at the center of a 1920x1080 surface.
        let p = Position::from_pixels(960.0, 540.0, 1920.0, 1080.0);
        assert!((p.x - 50.0).abs() < 1e-10);
        assert!((p.y - 50.0).abs() < 1e-10);

        let corner = Position::from_pixels(1920.0, 1080.0, 1920.0, 1080.0);
        assert!((corner.x - 100.0).abs() < 1e-10);
        assert!((corner.y - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_center() {
        let c = Position::center();
        assert_eq!(c.x, 50.0);
        assert_eq!(c.y, 50.0);
    }

    #[test]
    fn test_health_ratio() {
        let h = Health {
            current: 65.0,
            max: 100.0,
        };
        assert!((h.ratio() - 0.65).abs() < 1e-10);

        let overkill = Health {
            current: -5.0,
            max: 100.0,
        };
        assert_eq!(overkill.ratio(), 0.0);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..20 {
            time.advance();
        }
        assert_eq!(time.tick, 20);
        // 20 ticks at 20Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// The interval constants express the reference wall-clock periods.
    #[test]
    fn test_interval_constants_match_reference_periods() {
        assert!((DT - 0.05).abs() < 1e-12, "one tick is 50 ms");
        assert_eq!(SPAWN_INTERVAL_TICKS as f64 * DT, 3.0);
        assert_eq!(RELOAD_DURATION_TICKS as f64 * DT, 2.0);
        assert_eq!(TICK_RATE, 20);
    }
}
