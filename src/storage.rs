//! Snapshot persistence collaborators.
//!
//! The store consumes this interface but does not own it: anything that can
//! load and save a [`StateSnapshot`] under a key qualifies. Two
//! implementations are provided, a whole-file JSON store and an in-process
//! map for tests and persistence-free operation.

use crate::error::{Result, SplitError};
use crate::types::StateSnapshot;
use fs2::FileExt;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Storage key under which the ledger snapshot is persisted.
pub const STORAGE_KEY: &str = "fair-split-storage";

/// Current snapshot envelope version.
const SNAPSHOT_VERSION: u32 = 0;

/// Key-value persistence for ledger snapshots.
///
/// Both operations are synchronous from the store's perspective; the store
/// saves the full snapshot after every mutation, so implementations replace
/// wholesale rather than merge.
pub trait SnapshotStorage: Send + Sync {
    /// Load the snapshot stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<StateSnapshot>>;

    /// Replace the snapshot stored under `key`.
    fn save(&self, key: &str, snapshot: &StateSnapshot) -> Result<()>;
}

/// On-disk envelope around a snapshot: the state plus a version tag.
#[derive(Serialize, Deserialize)]
struct PersistedSnapshot {
    state: StateSnapshot,
    version: u32,
}

/// File-backed storage: one JSON file per key inside a directory.
///
/// Holds an exclusive lock file for the directory so two processes cannot
/// write the same snapshot; the data model assumes a single writer.
pub struct JsonFileStorage {
    dir: PathBuf,
    _lock_file: File,
}

impl JsonFileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(dir.join(".lock"))?;
        lock_file
            .try_lock_exclusive()
            .map_err(|_| SplitError::Locked)?;

        Ok(Self {
            dir,
            _lock_file: lock_file,
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn load(&self, key: &str) -> Result<Option<StateSnapshot>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let persisted: PersistedSnapshot = serde_json::from_slice(&bytes)
            .map_err(|e| SplitError::Deserialization(e.to_string()))?;

        if persisted.version != SNAPSHOT_VERSION {
            return Err(SplitError::InvalidFormat(format!(
                "unsupported snapshot version: {}",
                persisted.version
            )));
        }

        tracing::debug!(key, path = %path.display(), "Loaded snapshot");
        Ok(Some(persisted.state))
    }

    fn save(&self, key: &str, snapshot: &StateSnapshot) -> Result<()> {
        let persisted = PersistedSnapshot {
            state: snapshot.clone(),
            version: SNAPSHOT_VERSION,
        };
        let encoded = serde_json::to_vec(&persisted)
            .map_err(|e| SplitError::Serialization(e.to_string()))?;

        // Full-snapshot replace: write to a sibling temp file, then rename
        // over the old snapshot so a crash never leaves a torn file.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, &encoded)?;
        fs::rename(&tmp, &path)?;

        tracing::debug!(key, bytes = encoded.len(), "Saved snapshot");
        Ok(())
    }
}

impl<S: SnapshotStorage + ?Sized> SnapshotStorage for std::sync::Arc<S> {
    fn load(&self, key: &str) -> Result<Option<StateSnapshot>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, snapshot: &StateSnapshot) -> Result<()> {
        (**self).save(key, snapshot)
    }
}

/// In-process storage backed by a map. Durability-free by construction.
#[derive(Default)]
pub struct MemoryStorage {
    snapshots: RwLock<HashMap<String, StateSnapshot>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<StateSnapshot>> {
        Ok(self.snapshots.read().get(key).cloned())
    }

    fn save(&self, key: &str, snapshot: &StateSnapshot) -> Result<()> {
        self.snapshots
            .write()
            .insert(key.to_string(), snapshot.clone());
        Ok(())
    }
}
