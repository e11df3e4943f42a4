//! Currency ledger: the three spendable balances and affordability rules.

use serde::{Deserialize, Serialize};

/// The three currency denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyKind {
    Drop,
    Pearl,
    Leaf,
}

impl CurrencyKind {
    /// All denominations in display order.
    pub const ALL: [CurrencyKind; 3] = [CurrencyKind::Drop, CurrencyKind::Pearl, CurrencyKind::Leaf];

    pub fn name(&self) -> &'static str {
        match self {
            CurrencyKind::Drop => "drop",
            CurrencyKind::Pearl => "pearl",
            CurrencyKind::Leaf => "leaf",
        }
    }
}

/// A bundle of currency amounts, used both as a balance and as a cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currencies {
    pub drops: u64,
    pub pearls: u64,
    pub leaves: u64,
}

impl Currencies {
    pub const fn new(drops: u64, pearls: u64, leaves: u64) -> Self {
        Self {
            drops,
            pearls,
            leaves,
        }
    }

    /// A cost expressed in drops only.
    pub const fn drops_only(drops: u64) -> Self {
        Self::new(drops, 0, 0)
    }

    pub fn get(&self, kind: CurrencyKind) -> u64 {
        match kind {
            CurrencyKind::Drop => self.drops,
            CurrencyKind::Pearl => self.pearls,
            CurrencyKind::Leaf => self.leaves,
        }
    }

    pub fn add(&mut self, kind: CurrencyKind, amount: u64) {
        match kind {
            CurrencyKind::Drop => self.drops = self.drops.saturating_add(amount),
            CurrencyKind::Pearl => self.pearls = self.pearls.saturating_add(amount),
            CurrencyKind::Leaf => self.leaves = self.leaves.saturating_add(amount),
        }
    }

    /// True iff this balance covers `cost` in every denomination independently.
    pub fn can_afford(&self, cost: &Currencies) -> bool {
        self.drops >= cost.drops && self.pearls >= cost.pearls && self.leaves >= cost.leaves
    }

    /// Subtracts `cost` from this balance.
    ///
    /// Callers must have checked `can_afford` first; this does not re-check.
    pub fn deduct(&mut self, cost: &Currencies) {
        debug_assert!(self.can_afford(cost), "deduct called without affordability check");
        self.drops -= cost.drops;
        self.pearls -= cost.pearls;
        self.leaves -= cost.leaves;
    }
}
