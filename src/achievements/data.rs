//! Static achievement definitions and predicate measures.

use super::types::AchievementId;
use crate::core::game_state::GameState;

/// Static definition of an achievement. `reward` is credited in drops, to the
/// current balance only, at the moment of unlock.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub target: u64,
    pub reward: u64,
    pub secret: bool,
}

/// All achievement definitions in catalog (and display) order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ── Collection ───────────────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::FirstDrop,
        name: "First Drop",
        description: "Collect your first drop",
        target: 1,
        reward: 10,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::DropCollectorI,
        name: "Drop Collector I",
        description: "Collect 100 drops",
        target: 100,
        reward: 50,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::DropCollectorII,
        name: "Drop Collector II",
        description: "Collect 1,000 drops",
        target: 1_000,
        reward: 200,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::DropCollectorIII,
        name: "Drop Collector III",
        description: "Collect 10,000 drops",
        target: 10_000,
        reward: 1_000,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::DropCollectorIV,
        name: "Drop Collector IV",
        description: "Collect 100,000 drops",
        target: 100_000,
        reward: 5_000,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::PearlDiverI,
        name: "Pearl Diver I",
        description: "Collect 10 pearls",
        target: 10,
        reward: 100,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::PearlDiverII,
        name: "Pearl Diver II",
        description: "Collect 100 pearls",
        target: 100,
        reward: 500,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::LeafCatcherI,
        name: "Leaf Catcher I",
        description: "Collect 10 leaves",
        target: 10,
        reward: 100,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::LeafCatcherII,
        name: "Leaf Catcher II",
        description: "Collect 100 leaves",
        target: 100,
        reward: 500,
        secret: false,
    },
    // ── Upgrades ─────────────────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::FirstUpgrade,
        name: "Shipwright",
        description: "Buy your first upgrade",
        target: 1,
        reward: 25,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::Outfitter,
        name: "Outfitter",
        description: "Buy 10 upgrades",
        target: 10,
        reward: 250,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::MasterOutfitter,
        name: "Master Outfitter",
        description: "Buy 50 upgrades",
        target: 50,
        reward: 1_000,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::MaxedOut,
        name: "Overachiever",
        description: "Raise any upgrade to level 25",
        target: 25,
        reward: 2_500,
        secret: false,
    },
    // ── Ownership ────────────────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::SwanSong,
        name: "Swan Song",
        description: "Own the swan skin",
        target: 1,
        reward: 500,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::FirstMate,
        name: "First Mate",
        description: "Befriend a companion",
        target: 1,
        reward: 1_000,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::FullCrew,
        name: "Full Crew",
        description: "Befriend both companions",
        target: 2,
        reward: 2_000,
        secret: false,
    },
    // ── Prestige ─────────────────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::NewHorizons,
        name: "New Horizons",
        description: "Prestige for the first time",
        target: 1,
        reward: 5_000,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::OldSalt,
        name: "Old Salt",
        description: "Reach prestige level 3",
        target: 3,
        reward: 15_000,
        secret: true, // Hidden until unlocked
    },
    // ── Time ─────────────────────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::Dedicated,
        name: "Dedicated",
        description: "Play for one hour",
        target: 3_600,
        reward: 500,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::Veteran,
        name: "Veteran",
        description: "Play for 24 hours",
        target: 86_400,
        reward: 5_000,
        secret: false,
    },
    AchievementDef {
        id: AchievementId::SevenDaysAfloat,
        name: "Seven Days Afloat",
        description: "Reach a 7-day login streak",
        target: 7,
        reward: 1_000,
        secret: false,
    },
];

/// Get the definition for a specific achievement.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Current value of the quantity an achievement's predicate thresholds on.
/// The achievement unlocks once this reaches the definition's `target`.
pub fn measure(id: AchievementId, state: &GameState) -> u64 {
    match id {
        AchievementId::FirstDrop
        | AchievementId::DropCollectorI
        | AchievementId::DropCollectorII
        | AchievementId::DropCollectorIII
        | AchievementId::DropCollectorIV => state.lifetime.drops,
        AchievementId::PearlDiverI | AchievementId::PearlDiverII => state.lifetime.pearls,
        AchievementId::LeafCatcherI | AchievementId::LeafCatcherII => state.lifetime.leaves,
        AchievementId::FirstUpgrade
        | AchievementId::Outfitter
        | AchievementId::MasterOutfitter => state.upgrades_purchased,
        AchievementId::MaxedOut => u64::from(state.upgrades.highest()),
        AchievementId::SwanSong => u64::from(state.unlocks.swan_skin),
        AchievementId::FirstMate | AchievementId::FullCrew => {
            u64::from(state.unlocks.companion_count())
        }
        AchievementId::NewHorizons | AchievementId::OldSalt => u64::from(state.prestige.level),
        AchievementId::Dedicated | AchievementId::Veteran => state.play_time_seconds,
        AchievementId::SevenDaysAfloat => u64::from(state.login_streak),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_achievements_have_unique_ids() {
        use std::collections::HashSet;
        let mut ids = HashSet::new();
        for achievement in ALL_ACHIEVEMENTS {
            assert!(
                ids.insert(achievement.id),
                "Duplicate achievement ID: {:?}",
                achievement.id
            );
        }
    }

    #[test]
    fn test_all_achievements_have_positive_targets_and_rewards() {
        for achievement in ALL_ACHIEVEMENTS {
            assert!(achievement.target > 0, "{} has zero target", achievement.name);
            assert!(achievement.reward > 0, "{} has zero reward", achievement.name);
        }
    }

    #[test]
    fn test_get_achievement_def() {
        let def = get_achievement_def(AchievementId::FirstDrop).unwrap();
        assert_eq!(def.name, "First Drop");
        assert_eq!(def.target, 1);
    }

    #[test]
    fn test_secret_achievements() {
        assert!(get_achievement_def(AchievementId::OldSalt).unwrap().secret);
        assert!(!get_achievement_def(AchievementId::FirstDrop).unwrap().secret);
    }

    #[test]
    fn test_measure_reads_lifetime_totals_not_balance() {
        let mut state = GameState::new(0);
        state.currencies.drops = 5_000;
        state.lifetime.drops = 70;

        assert_eq!(measure(AchievementId::DropCollectorI, &state), 70);
    }

    #[test]
    fn test_measure_highest_upgrade_level() {
        let mut state = GameState::new(0);
        state.upgrades.rate = 12;
        state.upgrades.speed = 3;

        assert_eq!(measure(AchievementId::MaxedOut, &state), 12);
    }

    #[test]
    fn test_measure_companion_count() {
        let mut state = GameState::new(0);
        assert_eq!(measure(AchievementId::FullCrew, &state), 0);

        state.unlocks.fish_companion = true;
        assert_eq!(measure(AchievementId::FirstMate, &state), 1);

        state.unlocks.bird_companion = true;
        assert_eq!(measure(AchievementId::FullCrew, &state), 2);
    }
}
