//! Paperboat idle-economy core.
//!
//! The authoritative game state for a boat-collects-falling-things idle
//! game: currencies, upgrades, one-time purchases, achievements, prestige,
//! offline-earnings reconciliation, and the persistence seam. Presentation
//! (rendering, input, sound) lives outside this crate and talks to a
//! [`session::Session`].

pub mod achievements;
pub mod build_info;
pub mod clock;
pub mod core;
pub mod persistence;
pub mod session;

pub use crate::core::catalog::{OneTimeItem, UpgradeId};
pub use crate::core::currency::{Currencies, CurrencyKind};
pub use crate::core::game_state::{Cosmetic, GameState};
pub use crate::session::{Session, WelcomeBack};
