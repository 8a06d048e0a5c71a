//! Pipe-delimited flat-file sink.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::{
    enrollment::Enrollment,
    types::{
        DEFAULT_DATA_PATH, FIELD_DELIMITER, TIMESTAMP_MINUTE_FORMAT, TIMESTAMP_READ_FORMAT,
        TIMESTAMP_WRITE_FORMAT,
    },
};

use super::{EnrollmentSink, PersistError, PersistResult};

/// File implementation of [`crate::persist::EnrollmentSink`].
///
/// One record per line, `name|document|course|timestamp`, no header and no
/// escaping. Every save rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FlatFileSink {
    path: PathBuf,
}

impl FlatFileSink {
    /// Sink backed by the file at `path`. Nothing is touched until the first
    /// load or save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sink backed by [`DEFAULT_DATA_PATH`].
    pub fn default_location() -> Self {
        Self::open(DEFAULT_DATA_PATH)
    }

    /// Backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EnrollmentSink for FlatFileSink {
    fn load(&self) -> PersistResult<Vec<Enrollment>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        // Undecodable bytes (e.g. cp1252 text) become U+FFFD rather than failing the load.
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            warn!(path = %self.path.display(), "backing file is not valid UTF-8; invalid bytes replaced");
        }
        decode_lines(&content)
    }

    fn save(&mut self, records: &[Enrollment]) -> PersistResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let mut out = BufWriter::new(File::create(&self.path)?);
        for rec in records {
            writeln!(out, "{}", encode_line(rec))?;
        }
        out.flush()?;
        Ok(())
    }
}

fn encode_line(rec: &Enrollment) -> String {
    for (field, value) in [
        ("name", rec.name()),
        ("document", rec.document()),
        ("course", rec.course()),
    ] {
        if value.contains(FIELD_DELIMITER) || value.contains('\n') {
            warn!(field, value, "field contains a delimiter or newline; the line will not load back");
        }
    }

    format!(
        "{name}{d}{document}{d}{course}{d}{ts}",
        name = rec.name(),
        document = rec.document(),
        course = rec.course(),
        ts = rec.timestamp().format(TIMESTAMP_WRITE_FORMAT),
        d = FIELD_DELIMITER,
    )
}

fn decode_lines(content: &str) -> PersistResult<Vec<Enrollment>> {
    let mut out = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        // Trailing empty fields do not count, so `a|b|c|` has three.
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        let &[name, document, course, ts] = fields.as_slice() else {
            debug!(line = line_no, fields = fields.len(), "skipping malformed line");
            continue;
        };

        let timestamp = parse_timestamp(ts).map_err(|source| PersistError::Timestamp {
            line: line_no,
            value: ts.to_string(),
            source,
        })?;
        out.push(Enrollment::restore(name, document, course, timestamp));
    }

    Ok(out)
}

fn parse_timestamp(ts: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(ts, TIMESTAMP_READ_FORMAT)
        .or_else(|err| NaiveDateTime::parse_from_str(ts, TIMESTAMP_MINUTE_FORMAT).map_err(|_| err))
}
