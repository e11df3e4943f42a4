//! Offline earnings reconciliation.
//!
//! Computes drops accrued while the app was closed, based on the gap between
//! the saved last-visit timestamp and the current clock, and folds them into
//! the state exactly once per load.

use super::catalog::{idle_earnings, idle_rate_per_minute};
use super::currency::CurrencyKind;
use super::game_state::GameState;

/// Report of an offline reconciliation, surfaced to the presentation layer
/// as the "welcome back" notification payload.
#[derive(Debug, Clone, PartialEq)]
pub struct OfflineReport {
    /// Actual minutes offline (uncapped; earnings are capped separately).
    pub minutes_offline: f64,
    /// Drops credited to the balance.
    pub earnings: u64,
    /// Effective rate at the player's configuration, for display.
    pub rate_per_minute: f64,
}

/// Reconciles offline earnings against `now`.
///
/// Returns `Some` with the report when earnings were credited; in that case
/// `last_visit` is advanced to `now` so the computation cannot run twice for
/// the same gap. With zero earnings (no idle production, no elapsed time, or
/// a last visit in the future from clock skew) the state is left untouched
/// and `None` is returned.
///
/// Idle earnings land in the drop balance only; lifetime totals are not
/// incremented, so collection achievements and prestige points advance only
/// through live collection.
pub fn reconcile(state: &mut GameState, now: i64) -> Option<OfflineReport> {
    let elapsed_seconds = (now - state.last_visit).max(0);
    let minutes_offline = elapsed_seconds as f64 / 60.0;

    let earnings = idle_earnings(&state.upgrades, &state.unlocks, minutes_offline);
    if earnings == 0 {
        return None;
    }

    state.currencies.add(CurrencyKind::Drop, earnings);
    state.last_visit = now;

    let report = OfflineReport {
        minutes_offline,
        earnings,
        rate_per_minute: idle_rate_per_minute(&state.upgrades, &state.unlocks),
    };
    tracing::info!(
        minutes = report.minutes_offline,
        earnings = report.earnings,
        "credited offline earnings"
    );
    Some(report)
}
