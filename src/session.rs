//! The live game session: single owner of the game state.
//!
//! All mutations funnel through `&mut self`, so reads and writes of the
//! aggregate can never interleave. Hosts that need to share a session across
//! threads wrap it in a mutex; the session itself never spawns tasks or
//! blocks on I/O beyond the synchronous local save.
//!
//! Periodic work is pushed in by the host's timers: a play-time tick about
//! once a second and a save tick about every two seconds. Both are cheap and
//! best-effort; a failed save is logged and retried on the next tick.

use crate::achievements::{self, AchievementId};
use crate::clock::Clock;
use crate::core::catalog::{OneTimeItem, UpgradeId};
use crate::core::currency::CurrencyKind;
use crate::core::game_state::{Cosmetic, GameState};
use crate::core::offline;
use crate::persistence::{GameSnapshot, SnapshotStore};
use chrono::DateTime;

/// One-shot payload shown after a load that credited offline earnings.
#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeBack {
    pub earnings: u64,
    pub minutes_offline: f64,
}

/// A loaded game session.
///
/// `local` is the save of record: it is written synchronously and read first
/// on a cold start when no remote store is configured. `remote` is
/// best-effort replication: consulted first on load (it may hold a newer
/// save from another device), written fire-and-forget, and never allowed to
/// fail a session.
pub struct Session<C: Clock> {
    state: GameState,
    clock: C,
    local: Box<dyn SnapshotStore>,
    remote: Option<Box<dyn SnapshotStore>>,
    welcome_back: Option<WelcomeBack>,
    daily_reward_available: bool,
}

impl<C: Clock> Session<C> {
    /// Starts a session: loads the most recent snapshot (remote first, then
    /// local, then a fresh state) and reconciles offline earnings exactly
    /// once against the current clock.
    pub fn load(
        clock: C,
        local: Box<dyn SnapshotStore>,
        remote: Option<Box<dyn SnapshotStore>>,
    ) -> Self {
        let now = clock.now();

        let snapshot = match &remote {
            Some(remote_store) => try_load(remote_store.as_ref(), "remote")
                .or_else(|| try_load(local.as_ref(), "local")),
            None => try_load(local.as_ref(), "local"),
        };

        let (state, welcome_back, daily_reward_available) = match snapshot {
            Some(snapshot) => {
                let daily = !same_utc_day(snapshot.last_visit, now);
                let mut state = snapshot.into_state();
                let welcome = offline::reconcile(&mut state, now).map(|report| WelcomeBack {
                    earnings: report.earnings,
                    minutes_offline: report.minutes_offline,
                });
                (state, welcome, daily)
            }
            None => {
                tracing::info!("no snapshot found, starting a fresh game");
                (GameState::new(now), None, true)
            }
        };

        Self {
            state,
            clock,
            local,
            remote,
            welcome_back,
            daily_reward_available,
        }
    }

    /// Read-only view of the live state, for rendering.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Credits a collected pickup. Returns the applied (possibly
    /// companion-multiplied) amount.
    pub fn collect(&mut self, kind: CurrencyKind, amount: u64) -> u64 {
        let now = self.clock.now();
        self.state.collect(kind, amount, now)
    }

    pub fn purchase_upgrade(&mut self, upgrade: UpgradeId) -> bool {
        let now = self.clock.now();
        self.state.purchase_upgrade(upgrade, now)
    }

    pub fn purchase_one_time(&mut self, item: OneTimeItem) -> bool {
        let now = self.clock.now();
        self.state.purchase_one_time(item, now)
    }

    pub fn set_active_cosmetic(&mut self, cosmetic: Cosmetic) {
        self.state.set_active_cosmetic(cosmetic);
    }

    /// Performs a prestige reset. Returns the bonus points awarded, 0 when
    /// the lifetime threshold has not been met.
    pub fn perform_prestige(&mut self) -> u64 {
        let points = self.state.perform_prestige();
        if points > 0 {
            tracing::info!(
                level = self.state.prestige.level,
                points,
                "prestige performed"
            );
        }
        points
    }

    /// Claims the daily login reward. Returns the drops granted, 0 when the
    /// reward was already claimed today (calendar-day gate, sampled against
    /// the loaded snapshot's last visit).
    pub fn claim_daily_reward(&mut self) -> u64 {
        if !self.daily_reward_available {
            return 0;
        }
        self.daily_reward_available = false;

        let now = self.clock.now();
        let reward = self.state.apply_daily_reward(now);
        tracing::info!(
            reward,
            day = self.state.login_streak,
            "daily reward claimed"
        );
        reward
    }

    /// Host timer callback, ~1 s cadence: accrues play time.
    pub fn on_play_tick(&mut self) {
        self.state.play_time_seconds += 1;
        let now = self.clock.now();
        achievements::evaluate(&mut self.state, now);
    }

    /// Host timer callback, ~2 s cadence: persists the state. Returns false
    /// when the local save failed (it will be retried on the next tick).
    pub fn on_save_tick(&mut self) -> bool {
        self.save()
    }

    /// Persists the state now, advancing `last_visit` so the next load's
    /// offline computation starts from this save rather than session start.
    ///
    /// The local write is the one that matters; the remote write is
    /// replication and its failure is only logged.
    pub fn save(&mut self) -> bool {
        let now = self.clock.now();
        self.state.last_visit = now;
        self.state.updated_at = now;

        let snapshot = GameSnapshot::from_state(&self.state);

        let local_ok = match self.local.save(&snapshot) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "local save failed, will retry next tick");
                false
            }
        };

        if let Some(remote) = &self.remote {
            if let Err(err) = remote.save(&snapshot) {
                tracing::warn!(%err, "remote save failed, local save is the save of record");
            }
        }

        local_ok
    }

    /// One-shot offline-earnings payload, if this load credited any.
    pub fn take_welcome_back(&mut self) -> Option<WelcomeBack> {
        self.welcome_back.take()
    }

    /// Drains achievement ids unlocked since the last call. The presentation
    /// layer turns these into toasts/sounds; the core only queues them.
    pub fn take_unlock_events(&mut self) -> Vec<AchievementId> {
        std::mem::take(&mut self.state.unlock_events)
    }
}

fn try_load(store: &dyn SnapshotStore, source: &'static str) -> Option<GameSnapshot> {
    match store.load() {
        Ok(Some(snapshot)) => {
            tracing::info!(source, "loaded snapshot");
            Some(snapshot)
        }
        Ok(None) => None,
        Err(err) => {
            // Corrupt or unreachable: treated exactly like an absent snapshot
            tracing::warn!(source, %err, "snapshot load failed");
            None
        }
    }
}

/// True when both timestamps fall on the same UTC calendar day.
fn same_utc_day(a: i64, b: i64) -> bool {
    match (DateTime::from_timestamp(a, 0), DateTime::from_timestamp(b, 0)) {
        (Some(a), Some(b)) => a.date_naive() == b.date_naive(),
        _ => false,
    }
}
