//! Where the register keeps its data and how loudly it logs.

use std::path::PathBuf;

use crate::{
    core::store::EnrollmentStore,
    persist::{PersistResult, flat_file::FlatFileSink},
    types::DEFAULT_DATA_PATH,
};

/// Storage backing chosen for a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageMode {
    /// Write-through to a pipe-delimited file.
    File(PathBuf),
    /// Keep everything in memory for the life of the process.
    InMemory,
}

/// Runtime configuration for opening a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinConfig {
    /// Storage backing.
    pub storage: StorageMode,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for CheckinConfig {
    fn default() -> Self {
        Self {
            storage: StorageMode::File(PathBuf::from(DEFAULT_DATA_PATH)),
            log_filter: "info".to_string(),
        }
    }
}

impl CheckinConfig {
    /// Opens a store for the configured backing, loading any persisted
    /// records.
    pub fn open_store(&self) -> PersistResult<EnrollmentStore> {
        match &self.storage {
            StorageMode::File(path) => {
                EnrollmentStore::with_sink(Box::new(FlatFileSink::open(path.clone())))
            }
            StorageMode::InMemory => Ok(EnrollmentStore::new()),
        }
    }
}
