pub mod flat_file;
pub mod memory;

use crate::enrollment::Enrollment;

/// Failures raised by an [`EnrollmentSink`].
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Reading or writing the backing storage failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A line had four fields but its timestamp did not parse.
    #[error("line {line}: invalid timestamp {value:?}: {source}")]
    Timestamp {
        /// 1-based line number in the backing file.
        line: usize,
        /// Offending timestamp text.
        value: String,
        /// Underlying parse error.
        #[source]
        source: chrono::ParseError,
    },
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Backing storage for the full enrollment collection.
///
/// Both calls operate on the whole collection; there is no incremental append.
pub trait EnrollmentSink: Send {
    /// Returns every persisted record in insertion order.
    fn load(&self) -> PersistResult<Vec<Enrollment>>;
    /// Replaces the persisted collection with `records`.
    fn save(&mut self, records: &[Enrollment]) -> PersistResult<()>;
}
