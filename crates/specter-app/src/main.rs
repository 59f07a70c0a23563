//! Headless demo: runs a short scripted hunt and prints the results.

use std::time::Duration;

use specter_app::control;
use specter_app::state::HostState;
use specter_arsenal::profiles::catalog;
use specter_core::commands::PlayerCommand;
use specter_core::enums::WeaponKind;
use specter_sim::engine::SimConfig;

fn main() {
    // Shop front: browse the catalog and buy the reference rifle.
    println!("-- arsenal --");
    for weapon in catalog() {
        println!(
            "{:<16} {:>4} coins  dmg {:>5}  mag {:>2}  [{:?}]",
            weapon.name, weapon.price, weapon.damage, weapon.magazine, weapon.rarity
        );
    }

    let state = HostState::new();
    {
        let mut profile = state.profile.lock().expect("profile lock");
        // Demo wallet is not enough for the rifle out of the box; top up.
        profile.coins += 500;
        let cost = profile
            .purchase(WeaponKind::Rifle)
            .expect("rifle purchase should succeed");
        profile.equip(WeaponKind::Rifle).expect("equip owned rifle");
        println!("bought Assault Rifle for {cost} coins");
    }

    let equipped = state.profile.lock().expect("profile lock").equipped;
    control::start(
        &state,
        SimConfig {
            weapon: equipped,
            ..Default::default()
        },
        |snapshot| {
            for event in &snapshot.feedback {
                if let Ok(json) = serde_json::to_string(event) {
                    println!("event: {json}");
                }
            }
        },
    )
    .expect("start encounter loop");

    control::send_command(&state, PlayerCommand::StartSession).expect("start session");

    // Let the first monster spawn (one full 3s interval), then engage it.
    std::thread::sleep(Duration::from_millis(3200));
    let snapshot = control::get_snapshot(&state)
        .expect("poll snapshot")
        .expect("snapshot available");

    if let Some(monster) = snapshot.monsters.first() {
        for _ in 0..3 {
            control::send_command(
                &state,
                PlayerCommand::Shoot {
                    x: monster.position.x,
                    y: monster.position.y,
                },
            )
            .expect("send shot");
        }
    }

    // Reload cycle, then wind down.
    std::thread::sleep(Duration::from_millis(200));
    control::send_command(&state, PlayerCommand::Reload).expect("send reload");
    std::thread::sleep(Duration::from_millis(2200));
    control::send_command(&state, PlayerCommand::EndSession).expect("end session");
    std::thread::sleep(Duration::from_millis(100));

    let final_snapshot = control::get_snapshot(&state)
        .expect("poll snapshot")
        .expect("snapshot available");
    let profile = control::get_profile(&state).expect("read profile");

    println!("final score: {}", final_snapshot.score);
    println!(
        "profile: level {} / {} XP, {} coins, {} kills",
        profile.level, profile.experience, profile.coins, profile.kills
    );

    control::shutdown(&state).expect("shutdown");
}
