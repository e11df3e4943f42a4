//! Achievement system types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for each achievement. The catalog is closed: adding an
/// achievement means adding a variant here, a definition in `data.rs`, and a
/// `measure` arm, so the compiler enforces exhaustiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Lifetime drop collection
    FirstDrop,
    DropCollectorI,
    DropCollectorII,
    DropCollectorIII,
    DropCollectorIV,
    // Lifetime pearl collection
    PearlDiverI,
    PearlDiverII,
    // Lifetime leaf collection
    LeafCatcherI,
    LeafCatcherII,
    // Purchase counters
    FirstUpgrade,
    Outfitter,
    MasterOutfitter,
    MaxedOut,
    // Ownership
    SwanSong,
    FirstMate,
    FullCrew,
    // Prestige
    NewHorizons,
    OldSalt,
    // Play time
    Dedicated,
    Veteran,
    // Login streak
    SevenDaysAfloat,
}

/// Per-achievement record: unlock state plus progress toward the target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub unlocked: bool,
    pub unlocked_at: Option<i64>,
    pub progress: u64,
}

/// All achievement records, keyed by the closed id set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Achievements {
    records: HashMap<AchievementId, AchievementRecord>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.records.get(&id).map_or(false, |r| r.unlocked)
    }

    /// Marks `id` unlocked at `now`. Returns true only on the false -> true
    /// transition; an already-unlocked id is left untouched.
    pub fn unlock(&mut self, id: AchievementId, now: i64) -> bool {
        let record = self.records.entry(id).or_default();
        if record.unlocked {
            return false;
        }
        record.unlocked = true;
        record.unlocked_at = Some(now);
        true
    }

    /// Updates progress toward a locked achievement's target.
    pub fn set_progress(&mut self, id: AchievementId, progress: u64) {
        self.records.entry(id).or_default().progress = progress;
    }

    pub fn record(&self, id: AchievementId) -> Option<&AchievementRecord> {
        self.records.get(&id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.records.values().filter(|r| r.unlocked).count()
    }

    /// Unlocked ids with their timestamps, for snapshotting.
    pub fn unlocked_entries(&self) -> Vec<(AchievementId, Option<i64>)> {
        self.records
            .iter()
            .filter(|(_, r)| r.unlocked)
            .map(|(id, r)| (*id, r.unlocked_at))
            .collect()
    }

    /// Rebuilds the unlock set from snapshot entries. Progress is not
    /// persisted; it is recomputed on the next evaluation pass.
    pub fn from_unlocked_entries(entries: &[(AchievementId, Option<i64>)]) -> Self {
        let mut achievements = Self::default();
        for (id, unlocked_at) in entries {
            achievements.records.insert(
                *id,
                AchievementRecord {
                    unlocked: true,
                    unlocked_at: *unlocked_at,
                    progress: 0,
                },
            );
        }
        achievements
    }
}
