//! Snapshot stores: where durable saves live.
//!
//! The session talks to `SnapshotStore` only; whether a store is a local
//! file, a remote database, or test memory is its own business. Store
//! failures are recoverable by contract: the session logs and falls back,
//! never crashes.

use super::snapshot::GameSnapshot;
use crate::core::constants::SAVE_VERSION_MAGIC;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A durable home for game snapshots.
///
/// `load` returns `Ok(None)` when no snapshot has ever been saved; errors
/// mean the store is unreadable or its contents are corrupt.
pub trait SnapshotStore {
    fn load(&self) -> io::Result<Option<GameSnapshot>>;
    fn save(&self, snapshot: &GameSnapshot) -> io::Result<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Arc<S> {
    fn load(&self) -> io::Result<Option<GameSnapshot>> {
        (**self).load()
    }

    fn save(&self, snapshot: &GameSnapshot) -> io::Result<()> {
        (**self).save(snapshot)
    }
}

/// Checksummed binary save file.
///
/// File format:
/// - Version magic (8 bytes)
/// - Data length (4 bytes)
/// - Serialized snapshot (variable length)
/// - SHA256 checksum (32 bytes)
pub struct FileStore {
    save_path: PathBuf,
}

impl FileStore {
    /// Creates a store at the platform save location
    /// (e.g. `~/.config/paperboat/save.dat` on Linux).
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "paperboat").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// Creates a store at an explicit path.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> io::Result<Option<GameSnapshot>> {
        let mut file = match fs::File::open(&self.save_path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        // Read and verify version magic
        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        // Read data length
        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        // Read data
        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        // Read and verify checksum
        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        let snapshot = bincode::deserialize::<GameSnapshot>(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &GameSnapshot) -> io::Result<()> {
        let data = bincode::serialize(snapshot)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        // Checksum covers version + length + data
        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }
}

/// Human-readable JSON save file. Useful as an export format and as the
/// secondary store in a two-tier setup.
pub struct JsonFileStore {
    save_path: PathBuf,
}

impl JsonFileStore {
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> io::Result<Option<GameSnapshot>> {
        let json = match fs::read_to_string(&self.save_path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        let snapshot = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &GameSnapshot) -> io::Result<()> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.save_path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and as a stand-in for a remote backend.
/// Can be switched into a failing mode to exercise fallback paths.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<GameSnapshot>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While failing, every load and save returns an error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn contains_snapshot(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    fn check_failing(&self) -> io::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "store unavailable",
            ));
        }
        Ok(())
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> io::Result<Option<GameSnapshot>> {
        self.check_failing()?;
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, snapshot: &GameSnapshot) -> io::Result<()> {
        self.check_failing()?;
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(snapshot.clone());
        Ok(())
    }
}
