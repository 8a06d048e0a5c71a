//! In-memory sink for tests and file-less embedding.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::enrollment::Enrollment;

use super::{EnrollmentSink, PersistResult};

#[derive(Debug, Default)]
struct MemoryState {
    records: Vec<Enrollment>,
    saves: usize,
}

/// Sink that keeps the "persisted" collection in memory.
///
/// Clones share state, so a test can hand one clone to the store and inspect
/// the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that already holds `records`, as if a previous run saved them.
    pub fn with_records(records: Vec<Enrollment>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState { records, saves: 0 })),
        }
    }

    /// Currently persisted records.
    pub fn records(&self) -> Vec<Enrollment> {
        self.lock().records.clone()
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EnrollmentSink for MemorySink {
    fn load(&self) -> PersistResult<Vec<Enrollment>> {
        Ok(self.lock().records.clone())
    }

    fn save(&mut self, records: &[Enrollment]) -> PersistResult<()> {
        let mut state = self.lock();
        state.records = records.to_vec();
        state.saves += 1;
        Ok(())
    }
}
