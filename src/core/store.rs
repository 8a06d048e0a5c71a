use std::fmt;

use chrono::{Local, NaiveDateTime, SubsecRound};
use tracing::{debug, error, info};

use crate::{
    core::summary::Summary,
    enrollment::{Enrollment, EnrollmentDraft},
    persist::{EnrollmentSink, PersistError, PersistResult},
};

/// Sample `(name, document, course)` rows seeded by
/// [`EnrollmentStore::load_demo_data`].
pub const DEMO_ENROLLMENTS: [(&str, &str, &str); 3] = [
    ("Ana Pérez", "51234567", "Prog 2"),
    ("Luis Gómez", "49887766", "Prog 1"),
    ("Camila Díaz", "53422110", "Base de Datos"),
];

/// Authoritative, append-only enrollment register.
///
/// Without a sink the store is purely in-memory. With a sink, the persisted
/// records are loaded on construction and the whole collection is written
/// back after every registration.
pub struct EnrollmentStore {
    records: Vec<Enrollment>,
    sink: Option<Box<dyn EnrollmentSink>>,
}

impl Default for EnrollmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnrollmentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnrollmentStore")
            .field("records", &self.records)
            .field("persistent", &self.is_persistent())
            .finish()
    }
}

impl EnrollmentStore {
    /// In-memory store with no persistence.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            sink: None,
        }
    }

    /// Store backed by `sink`, preloaded with everything it holds.
    ///
    /// I/O failures are logged and the store starts empty. A corrupt
    /// timestamp aborts construction.
    pub fn with_sink(sink: Box<dyn EnrollmentSink>) -> PersistResult<Self> {
        let records = match sink.load() {
            Ok(records) => records,
            Err(PersistError::Io(err)) => {
                error!(error = %err, "failed to load enrollments, starting empty");
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        info!(count = records.len(), "loaded enrollments");

        Ok(Self {
            records,
            sink: Some(sink),
        })
    }

    /// True when registrations are written through to a sink.
    pub fn is_persistent(&self) -> bool {
        self.sink.is_some()
    }

    /// Applies defaulting to `draft`, appends the record stamped with the
    /// current local time, and rewrites the sink.
    pub fn register(&mut self, draft: EnrollmentDraft) -> &Enrollment {
        let rec = draft.into_enrollment(now());
        debug!(name = rec.name(), course = rec.course(), "registered enrollment");

        let idx = self.records.len();
        self.records.push(rec);
        self.persist();
        &self.records[idx]
    }

    /// All records in registration order.
    pub fn list(&self) -> &[Enrollment] {
        &self.records
    }

    /// Records whose name or document contains `query`, ignoring case.
    ///
    /// A blank query matches everything. A non-blank query is matched as
    /// given, surrounding whitespace included.
    pub fn search(&self, query: &str) -> Vec<&Enrollment> {
        if query.trim().is_empty() {
            return self.records.iter().collect();
        }
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|rec| rec.matches_lowercase(&needle))
            .collect()
    }

    /// Total plus per-course counts in first-occurrence order.
    pub fn summarize(&self) -> Summary {
        Summary::from_records(&self.records)
    }

    /// Registers [`DEMO_ENROLLMENTS`] one by one, persisting after each.
    pub fn load_demo_data(&mut self) {
        for (name, document, course) in DEMO_ENROLLMENTS {
            self.register(EnrollmentDraft::new(name, document, course));
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been registered or loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recently registered record.
    pub fn latest(&self) -> Option<&Enrollment> {
        self.records.last()
    }

    /// Last `n` records, oldest first.
    pub fn recent(&self, n: usize) -> &[Enrollment] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    fn persist(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if let Err(err) = sink.save(&self.records) {
            error!(error = %err, count = self.records.len(), "failed to save enrollments");
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
