//! Progression catalog: pure cost and idle-rate functions.
//!
//! Everything here is stateless and deterministic; identical inputs always
//! produce identical outputs, so these are safe to call from any thread.

use super::constants::*;
use super::currency::Currencies;
use super::game_state::{UpgradeLevels, Unlocks};
use serde::{Deserialize, Serialize};

/// The four leveled upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    Speed,
    Radius,
    Rate,
    Collector,
}

impl UpgradeId {
    /// All upgrades, cheapest first.
    pub const ALL: [UpgradeId; 4] = [
        UpgradeId::Speed,
        UpgradeId::Radius,
        UpgradeId::Rate,
        UpgradeId::Collector,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeId::Speed => "speed",
            UpgradeId::Radius => "radius",
            UpgradeId::Rate => "rate",
            UpgradeId::Collector => "collector",
        }
    }
}

/// The four one-time purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OneTimeItem {
    Flag,
    SwanSkin,
    FishCompanion,
    BirdCompanion,
}

impl OneTimeItem {
    /// All items in catalog order, cheapest first.
    pub const ALL: [OneTimeItem; 4] = [
        OneTimeItem::Flag,
        OneTimeItem::SwanSkin,
        OneTimeItem::FishCompanion,
        OneTimeItem::BirdCompanion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OneTimeItem::Flag => "flag",
            OneTimeItem::SwanSkin => "swan skin",
            OneTimeItem::FishCompanion => "fish companion",
            OneTimeItem::BirdCompanion => "bird companion",
        }
    }
}

/// Cost of buying `upgrade` at `level` (the level the player currently has).
///
/// Exponential scaling: `floor(base * growth^level)`, charged in drops.
pub fn upgrade_cost(upgrade: UpgradeId, level: u32) -> Currencies {
    let (base, growth) = match upgrade {
        UpgradeId::Speed => (SPEED_BASE_COST, SPEED_COST_GROWTH),
        UpgradeId::Radius => (RADIUS_BASE_COST, RADIUS_COST_GROWTH),
        UpgradeId::Rate => (RATE_BASE_COST, RATE_COST_GROWTH),
        UpgradeId::Collector => (COLLECTOR_BASE_COST, COLLECTOR_COST_GROWTH),
    };
    let cost = (base as f64 * growth.powi(level as i32)).floor();
    Currencies::drops_only(cost as u64)
}

/// Fixed cost of a one-time purchase.
pub fn one_time_cost(item: OneTimeItem) -> Currencies {
    match item {
        OneTimeItem::Flag => Currencies::drops_only(FLAG_COST_DROPS),
        OneTimeItem::SwanSkin => Currencies::new(SWAN_SKIN_COST_DROPS, SWAN_SKIN_COST_PEARLS, 0),
        OneTimeItem::FishCompanion => {
            Currencies::new(FISH_COMPANION_COST_DROPS, FISH_COMPANION_COST_PEARLS, 0)
        }
        OneTimeItem::BirdCompanion => {
            Currencies::new(BIRD_COMPANION_COST_DROPS, 0, BIRD_COMPANION_COST_LEAVES)
        }
    }
}

/// Drops earned per offline minute for the given configuration.
///
/// Every upgrade contributes to idle production; companions add +10% each,
/// additively, applied to the summed rate once.
pub fn idle_rate_per_minute(upgrades: &UpgradeLevels, unlocks: &Unlocks) -> f64 {
    let base = f64::from(upgrades.collector) * IDLE_RATE_PER_COLLECTOR_LEVEL
        + f64::from(upgrades.speed) * IDLE_RATE_PER_SPEED_LEVEL
        + f64::from(upgrades.radius) * IDLE_RATE_PER_RADIUS_LEVEL
        + f64::from(upgrades.rate) * IDLE_RATE_PER_RATE_LEVEL;

    let multiplier = 1.0 + unlocks.companion_count() as f64 * IDLE_COMPANION_BONUS;
    base * multiplier
}

/// Total drops earned over `minutes_offline` minutes, capped at 24 hours.
///
/// Non-positive elapsed time (including clock skew that puts the last visit
/// in the future) earns exactly zero.
pub fn idle_earnings(upgrades: &UpgradeLevels, unlocks: &Unlocks, minutes_offline: f64) -> u64 {
    if minutes_offline <= 0.0 {
        return 0;
    }
    let capped = minutes_offline.min(MAX_OFFLINE_MINUTES);
    (capped * idle_rate_per_minute(upgrades, unlocks)).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upgrades(speed: u32, radius: u32, rate: u32, collector: u32) -> UpgradeLevels {
        UpgradeLevels {
            speed,
            radius,
            rate,
            collector,
        }
    }

    fn both_companions() -> Unlocks {
        Unlocks {
            fish_companion: true,
            bird_companion: true,
            ..Unlocks::default()
        }
    }

    #[test]
    fn test_idle_earnings_collector_only() {
        // 10 collector levels * 2 drops/min * 60 min = 1200
        let earnings = idle_earnings(&upgrades(0, 0, 0, 10), &Unlocks::default(), 60.0);
        assert_eq!(earnings, 1200);
    }

    #[test]
    fn test_idle_earnings_all_upgrades() {
        // collector 10*2 + speed 10*0.5 + radius 10*0.75 + rate 10*1 = 42.5/min
        let earnings = idle_earnings(&upgrades(10, 10, 10, 10), &Unlocks::default(), 60.0);
        assert_eq!(earnings, 2550);
    }

    #[test]
    fn test_idle_earnings_with_both_companions() {
        // 20/min * 1.2 = 24/min * 60 = 1440
        let earnings = idle_earnings(&upgrades(0, 0, 0, 10), &both_companions(), 60.0);
        assert_eq!(earnings, 1440);
    }

    #[test]
    fn test_idle_earnings_companion_bonus_is_additive_not_compounded() {
        let one = Unlocks {
            fish_companion: true,
            ..Unlocks::default()
        };
        let one_earnings = idle_earnings(&upgrades(0, 0, 0, 10), &one, 60.0);
        let both_earnings = idle_earnings(&upgrades(0, 0, 0, 10), &both_companions(), 60.0);

        // 1.1x and 1.2x, not 1.1x and 1.21x
        assert_eq!(one_earnings, 1320);
        assert_eq!(both_earnings, 1440);
    }

    #[test]
    fn test_idle_earnings_capped_at_24_hours() {
        let upgrades = upgrades(0, 0, 0, 10);
        let two_days = idle_earnings(&upgrades, &Unlocks::default(), 60.0 * 48.0);
        let one_day = idle_earnings(&upgrades, &Unlocks::default(), 60.0 * 24.0);

        assert_eq!(two_days, one_day);
        assert_eq!(one_day, 28_800); // 10 * 2 * 60 * 24
    }

    #[test]
    fn test_idle_earnings_zero_and_negative_minutes() {
        let upgrades = upgrades(10, 10, 10, 10);
        assert_eq!(idle_earnings(&upgrades, &both_companions(), 0.0), 0);
        assert_eq!(idle_earnings(&upgrades, &both_companions(), -90.0), 0);
    }

    #[test]
    fn test_idle_earnings_monotonic_in_minutes() {
        let upgrades = upgrades(3, 1, 2, 4);
        let mut previous = 0;
        for minutes in [1.0, 10.0, 60.0, 600.0, 1440.0, 2000.0] {
            let earnings = idle_earnings(&upgrades, &Unlocks::default(), minutes);
            assert!(earnings >= previous, "earnings decreased at {minutes} min");
            previous = earnings;
        }
    }

    #[test]
    fn test_idle_earnings_monotonic_in_each_upgrade() {
        for id in UpgradeId::ALL {
            let base = upgrades(2, 2, 2, 2);
            let mut raised = base;
            raised.raise(id);

            let before = idle_earnings(&base, &Unlocks::default(), 60.0);
            let after = idle_earnings(&raised, &Unlocks::default(), 60.0);
            assert!(after > before, "{} level did not increase earnings", id.name());
        }
    }

    #[test]
    fn test_upgrade_base_costs() {
        assert_eq!(upgrade_cost(UpgradeId::Speed, 0), Currencies::drops_only(10));
        assert_eq!(upgrade_cost(UpgradeId::Radius, 0), Currencies::drops_only(25));
        assert_eq!(upgrade_cost(UpgradeId::Rate, 0), Currencies::drops_only(50));
        assert_eq!(
            upgrade_cost(UpgradeId::Collector, 0),
            Currencies::drops_only(100)
        );
    }

    #[test]
    fn test_upgrade_cost_strictly_increasing_per_level() {
        for id in UpgradeId::ALL {
            for level in 0..40 {
                let current = upgrade_cost(id, level).drops;
                let next = upgrade_cost(id, level + 1).drops;
                assert!(
                    next > current,
                    "{} cost not increasing at level {level}",
                    id.name()
                );
            }
        }
    }

    #[test]
    fn test_upgrade_base_costs_ordered_across_identifiers() {
        let costs: Vec<u64> = UpgradeId::ALL
            .iter()
            .map(|id| upgrade_cost(*id, 0).drops)
            .collect();
        for pair in costs.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_upgrade_cost_exact_values() {
        // floor(10 * 1.15^5) = floor(20.11...) = 20
        assert_eq!(upgrade_cost(UpgradeId::Speed, 5).drops, 20);
        // floor(100 * 1.3^10) = floor(1378.58...) = 1378
        assert_eq!(upgrade_cost(UpgradeId::Collector, 10).drops, 1378);
    }

    #[test]
    fn test_one_time_costs() {
        let flag = one_time_cost(OneTimeItem::Flag);
        assert_eq!(flag, Currencies::drops_only(1_000));

        let swan = one_time_cost(OneTimeItem::SwanSkin);
        assert_eq!(swan, Currencies::new(5_000, 10, 0));

        let fish = one_time_cost(OneTimeItem::FishCompanion);
        assert_eq!(fish, Currencies::new(10_000, 50, 0));

        let bird = one_time_cost(OneTimeItem::BirdCompanion);
        assert_eq!(bird, Currencies::new(15_000, 0, 20));
    }

    #[test]
    fn test_one_time_costs_increase_in_catalog_order() {
        let drops: Vec<u64> = OneTimeItem::ALL
            .iter()
            .map(|item| one_time_cost(*item).drops)
            .collect();
        for pair in drops.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
