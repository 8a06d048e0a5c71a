//! Shared constants for defaulting and the on-disk record format.

/// Name stored when a registration arrives with a blank or absent name.
pub const NO_NAME_PLACEHOLDER: &str = "(no name)";

/// Course stored when a registration arrives with a blank or absent course.
pub const DEFAULT_COURSE: &str = "Prog 1";

/// Default location of the backing file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/inscripciones.csv";

/// Separator between the four fields of a persisted line.
pub const FIELD_DELIMITER: char = '|';

/// Format used when writing timestamps (ISO-8601 local date-time).
pub const TIMESTAMP_WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format used when reading timestamps; accepts optional fractional seconds.
pub const TIMESTAMP_READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Fallback read format for timestamps written without seconds.
pub const TIMESTAMP_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
