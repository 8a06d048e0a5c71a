//! Enrollment record and the draft it is registered from.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::types::{DEFAULT_COURSE, NO_NAME_PLACEHOLDER};

/// One check-in entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrollment {
    name: String,
    document: String,
    course: String,
    timestamp: NaiveDateTime,
}

impl Enrollment {
    /// Rebuilds an already-persisted record verbatim.
    ///
    /// No defaulting or trimming is applied; new records go through
    /// [`crate::core::store::EnrollmentStore::register`] instead.
    pub fn restore(
        name: impl Into<String>,
        document: impl Into<String>,
        course: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
            course: course.into(),
            timestamp,
        }
    }

    /// Attendee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity document, possibly empty.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Course the attendee checked into.
    pub fn course(&self) -> &str {
        &self.course
    }

    /// Local date-time of registration.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Case-insensitive substring match on name or document.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.document.to_lowercase().contains(needle)
    }
}

/// Raw registration input. Every field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnrollmentDraft {
    /// Attendee name; blank or absent becomes [`NO_NAME_PLACEHOLDER`].
    pub name: Option<String>,
    /// Identity document; absent becomes an empty string.
    pub document: Option<String>,
    /// Course; blank or absent becomes [`DEFAULT_COURSE`].
    pub course: Option<String>,
}

impl EnrollmentDraft {
    /// Draft with every field present.
    pub fn new(
        name: impl Into<String>,
        document: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            document: Some(document.into()),
            course: Some(course.into()),
        }
    }

    /// Applies the defaulting rules and stamps the record.
    pub(crate) fn into_enrollment(self, timestamp: NaiveDateTime) -> Enrollment {
        Enrollment {
            name: non_blank_or(self.name, NO_NAME_PLACEHOLDER),
            document: self
                .document
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            course: non_blank_or(self.course, DEFAULT_COURSE),
            timestamp,
        }
    }
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}
