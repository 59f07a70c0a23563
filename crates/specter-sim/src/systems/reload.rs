//! Reload completion system.

use specter_core::events::FeedbackEvent;

use crate::loadout::Loadout;

/// Restore the magazine once the in-flight reload's deadline tick is
/// reached. The deadline lives in engine-owned state and is cleared on
/// session end, so a completed or cancelled session never receives a
/// stray restore.
pub fn run(loadout: &mut Loadout, current_tick: u64, feedback: &mut Vec<FeedbackEvent>) {
    let Some(done_tick) = loadout.reload_done_tick else {
        return;
    };

    if current_tick >= done_tick {
        loadout.refill();
        loadout.reload_done_tick = None;
        feedback.push(FeedbackEvent::ReloadComplete);
    }
}
