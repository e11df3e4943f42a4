//! The game state aggregate: the single mutable root of all player progress.
//!
//! One live instance exists per session and every mutation funnels through
//! `&mut self` methods, so the single-writer discipline holds by construction.
//! Compound operations (affordability check, deduction, level increment) run
//! to completion before the borrow ends, so nothing can interleave.

use super::catalog::{self, OneTimeItem, UpgradeId};
use super::constants::*;
use super::currency::{Currencies, CurrencyKind};
use crate::achievements::{self, AchievementId, Achievements};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Levels of the four leveled upgrades. Levels only ever increase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    pub speed: u32,
    pub radius: u32,
    pub rate: u32,
    pub collector: u32,
}

impl UpgradeLevels {
    pub fn level(&self, id: UpgradeId) -> u32 {
        match id {
            UpgradeId::Speed => self.speed,
            UpgradeId::Radius => self.radius,
            UpgradeId::Rate => self.rate,
            UpgradeId::Collector => self.collector,
        }
    }

    pub fn raise(&mut self, id: UpgradeId) {
        match id {
            UpgradeId::Speed => self.speed += 1,
            UpgradeId::Radius => self.radius += 1,
            UpgradeId::Rate => self.rate += 1,
            UpgradeId::Collector => self.collector += 1,
        }
    }

    pub fn highest(&self) -> u32 {
        self.speed
            .max(self.radius)
            .max(self.rate)
            .max(self.collector)
    }
}

/// One-time unlock flags. Each flips false -> true exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unlocks {
    pub flag: bool,
    pub swan_skin: bool,
    pub fish_companion: bool,
    pub bird_companion: bool,
}

impl Unlocks {
    pub fn owns(&self, item: OneTimeItem) -> bool {
        match item {
            OneTimeItem::Flag => self.flag,
            OneTimeItem::SwanSkin => self.swan_skin,
            OneTimeItem::FishCompanion => self.fish_companion,
            OneTimeItem::BirdCompanion => self.bird_companion,
        }
    }

    pub fn grant(&mut self, item: OneTimeItem) {
        match item {
            OneTimeItem::Flag => self.flag = true,
            OneTimeItem::SwanSkin => self.swan_skin = true,
            OneTimeItem::FishCompanion => self.fish_companion = true,
            OneTimeItem::BirdCompanion => self.bird_companion = true,
        }
    }

    pub fn cosmetic_owned(&self, cosmetic: Cosmetic) -> bool {
        match cosmetic {
            Cosmetic::Default => true,
            Cosmetic::Swan => self.swan_skin,
        }
    }

    pub fn companion_count(&self) -> u32 {
        u32::from(self.fish_companion) + u32::from(self.bird_companion)
    }
}

/// Boat skins. `Default` is always owned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cosmetic {
    #[default]
    Default,
    Swan,
}

/// Permanent cross-run progression. Survives every prestige reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrestigeRecord {
    pub level: u32,
    pub bonus_points: u64,
    pub total_resets: u64,
}

/// Main game state containing all player progress.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player_id: String,
    pub currencies: Currencies,
    pub upgrades: UpgradeLevels,
    pub unlocks: Unlocks,
    pub active_cosmetic: Cosmetic,
    pub achievements: Achievements,
    /// Lifetime collection totals. Append-only: spending reduces the current
    /// balance but never this.
    pub lifetime: Currencies,
    pub play_time_seconds: u64,
    pub upgrades_purchased: u64,
    pub login_streak: u32,
    pub prestige: PrestigeRecord,
    pub last_visit: i64,
    pub created_at: i64,
    pub updated_at: i64,
    /// Achievement ids unlocked since the presentation layer last drained
    /// them (transient, not saved).
    pub unlock_events: Vec<AchievementId>,
}

impl GameState {
    /// Creates a zeroed "new game" state stamped with `now`.
    pub fn new(now: i64) -> Self {
        Self {
            player_id: Uuid::new_v4().to_string(),
            currencies: Currencies::default(),
            upgrades: UpgradeLevels::default(),
            unlocks: Unlocks::default(),
            active_cosmetic: Cosmetic::Default,
            achievements: Achievements::default(),
            lifetime: Currencies::default(),
            play_time_seconds: 0,
            upgrades_purchased: 0,
            login_streak: 0,
            prestige: PrestigeRecord::default(),
            last_visit: now,
            created_at: now,
            updated_at: now,
            unlock_events: Vec::new(),
        }
    }

    /// Credits a collected pickup, applying the matching companion's x2
    /// multiplier (pearls for the fish, leaves for the bird; drops are never
    /// multiplied). The multiplied amount lands in both the current balance
    /// and the lifetime total. Returns the applied amount.
    pub fn collect(&mut self, kind: CurrencyKind, amount: u64, now: i64) -> u64 {
        let applied = match kind {
            CurrencyKind::Pearl if self.unlocks.fish_companion => {
                amount * COMPANION_COLLECT_MULTIPLIER
            }
            CurrencyKind::Leaf if self.unlocks.bird_companion => {
                amount * COMPANION_COLLECT_MULTIPLIER
            }
            _ => amount,
        };
        self.currencies.add(kind, applied);
        self.lifetime.add(kind, applied);
        achievements::evaluate(self, now);
        applied
    }

    /// Buys one level of `upgrade` at its current-level price.
    ///
    /// Returns false (leaving the state untouched) when unaffordable.
    pub fn purchase_upgrade(&mut self, upgrade: UpgradeId, now: i64) -> bool {
        let cost = catalog::upgrade_cost(upgrade, self.upgrades.level(upgrade));
        if !self.currencies.can_afford(&cost) {
            return false;
        }
        self.currencies.deduct(&cost);
        self.upgrades.raise(upgrade);
        self.upgrades_purchased += 1;
        achievements::evaluate(self, now);
        true
    }

    /// Buys a one-time item. An already-owned item fails before any cost
    /// check; an unaffordable one fails with no state change.
    pub fn purchase_one_time(&mut self, item: OneTimeItem, now: i64) -> bool {
        if self.unlocks.owns(item) {
            return false;
        }
        let cost = catalog::one_time_cost(item);
        if !self.currencies.can_afford(&cost) {
            return false;
        }
        self.currencies.deduct(&cost);
        self.unlocks.grant(item);
        self.upgrades_purchased += 1;
        achievements::evaluate(self, now);
        true
    }

    /// Activates a cosmetic. Silently ignored when the skin is locked.
    pub fn set_active_cosmetic(&mut self, cosmetic: Cosmetic) {
        if self.unlocks.cosmetic_owned(cosmetic) {
            self.active_cosmetic = cosmetic;
        }
    }

    /// True once lifetime drops reach the prestige threshold.
    pub fn can_prestige(&self) -> bool {
        self.lifetime.drops >= PRESTIGE_UNLOCK_LIFETIME_DROPS
    }

    /// Points a prestige performed right now would award.
    pub fn prestige_points_available(&self) -> u64 {
        (self.lifetime.drops as f64 / PRESTIGE_POINT_DIVISOR).sqrt().floor() as u64
    }

    /// Resets the run in exchange for permanent bonus points.
    ///
    /// Resets: current currencies, all upgrade levels, the decorative flag.
    /// Retains: skins, companions, achievements, lifetime totals, stats, and
    /// the prestige record itself. Returns the points awarded (0 when gated).
    ///
    /// Achievements are not evaluated here: currencies must be exactly zero
    /// after a prestige, and reward credits would break that. The next
    /// evaluated mutation picks up any prestige-level unlock.
    pub fn perform_prestige(&mut self) -> u64 {
        if !self.can_prestige() {
            return 0;
        }
        let points = self.prestige_points_available();

        self.currencies = Currencies::default();
        self.upgrades = UpgradeLevels::default();
        self.unlocks.flag = false;

        self.prestige.level += 1;
        self.prestige.bonus_points += points;
        self.prestige.total_resets += 1;

        points
    }

    /// Credits the next daily reward and advances the login streak.
    ///
    /// The once-per-calendar-day gate lives in the session, which knows the
    /// clock; this only applies the reward table.
    pub(crate) fn apply_daily_reward(&mut self, now: i64) -> u64 {
        let day = (self.login_streak + 1).min(DAILY_REWARDS.len() as u32);
        let reward = DAILY_REWARDS[(day - 1) as usize];
        self.currencies.add(CurrencyKind::Drop, reward);
        self.login_streak = day;
        achievements::evaluate(self, now);
        reward
    }
}
