//! Durable persistence: the snapshot DTO and the stores it lives in.

pub mod snapshot;
pub mod store;

pub use snapshot::{AchievementEntry, GameSnapshot};
pub use store::{FileStore, JsonFileStore, MemoryStore, SnapshotStore};
