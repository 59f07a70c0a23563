//! Shot resolution system — hit-scan against the active monster set.

use hecs::World;

use specter_core::components::{Health, MonsterId};
use specter_core::constants::{HIT_RADIUS, KILL_SCORE};
use specter_core::events::{FeedbackEvent, KillReward};
use specter_core::types::Position;

use crate::loadout::ScoreState;

/// Resolve one shot at `aim`. The caller has already checked the shot
/// preconditions and spent the ammo.
///
/// Scans for monsters within the hit radius and credits the lowest spawn
/// id among them — overlapping monsters resolve deterministically, and at
/// most one monster is damaged per shot.
pub fn resolve_shot(
    world: &mut World,
    aim: Position,
    damage: f64,
    score: &mut ScoreState,
    feedback: &mut Vec<FeedbackEvent>,
    rewards: &mut Vec<KillReward>,
) {
    let target = world
        .query_mut::<(&MonsterId, &Position)>()
        .into_iter()
        .filter(|(_, (_, pos))| pos.distance_to(&aim) < HIT_RADIUS)
        .map(|(entity, (id, _))| (entity, *id))
        .min_by_key(|&(_, id)| id);

    let Some((entity, id)) = target else {
        feedback.push(FeedbackEvent::Miss { x: aim.x, y: aim.y });
        return;
    };

    score.shots_hit += 1;

    let remaining = match world.get::<&mut Health>(entity) {
        Ok(mut health) => {
            health.current -= damage;
            health.current
        }
        // Target vanished between scan and damage; credit nothing.
        Err(_) => return,
    };

    if remaining <= 0.0 {
        let _ = world.despawn(entity);
        score.score += KILL_SCORE;
        score.monsters_killed += 1;
        feedback.push(FeedbackEvent::Kill {
            monster_id: id.0,
            score_award: KILL_SCORE,
        });
        rewards.push(KillReward::default());
    } else {
        feedback.push(FeedbackEvent::Hit {
            monster_id: id.0,
            health_remaining: remaining,
        });
    }
}
