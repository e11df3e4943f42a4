//! Achievement evaluation.
//!
//! Runs after every state mutation that can move a predicate input. Unlocks
//! are edge-triggered: once a record is unlocked it is never re-evaluated,
//! re-credited, or revoked.

use super::data::{measure, ALL_ACHIEVEMENTS};
use crate::core::currency::CurrencyKind;
use crate::core::game_state::GameState;

/// Evaluates the full catalog against `state`, unlocking every achievement
/// whose measure has reached its target and crediting its reward to the drop
/// balance (not the lifetime total).
///
/// The catalog is swept repeatedly until a full pass unlocks nothing, so an
/// unlock whose reward crosses another achievement's threshold resolves in
/// the same tick instead of waiting for the next action.
///
/// Newly unlocked ids are appended to `state.unlock_events` for the
/// presentation layer to drain. Returns the number of new unlocks.
pub fn evaluate(state: &mut GameState, now: i64) -> usize {
    let mut total_unlocked = 0;

    loop {
        let mut unlocked_this_pass = false;

        for def in ALL_ACHIEVEMENTS {
            if state.achievements.is_unlocked(def.id) {
                continue;
            }

            let current = measure(def.id, state);
            state
                .achievements
                .set_progress(def.id, current.min(def.target));

            if current >= def.target && state.achievements.unlock(def.id, now) {
                state.currencies.add(CurrencyKind::Drop, def.reward);
                state.unlock_events.push(def.id);
                tracing::info!(
                    achievement = def.name,
                    reward = def.reward,
                    "achievement unlocked"
                );
                unlocked_this_pass = true;
                total_unlocked += 1;
            }
        }

        if !unlocked_this_pass {
            break;
        }
    }

    total_unlocked
}
