//! Attendee check-in register with write-through flat-file persistence.
//!
//! # Examples
//!
//! In-memory usage with [`core::store::EnrollmentStore`]:
//! ```
//! use checkin::{core::store::EnrollmentStore, enrollment::EnrollmentDraft};
//!
//! let mut store = EnrollmentStore::new();
//! store.register(EnrollmentDraft::new("Ana Pérez", "51234567", "Prog 2"));
//! let rec = store.register(EnrollmentDraft::default());
//! assert_eq!(rec.name(), "(no name)");
//! assert_eq!(rec.course(), "Prog 1");
//!
//! let summary = store.summarize();
//! assert_eq!(summary.total, 2);
//! assert_eq!(summary.by_course[0].course, "Prog 2");
//! ```
//!
//! File-backed usage with [`persist::flat_file::FlatFileSink`]:
//! ```no_run
//! use checkin::{
//!     core::store::EnrollmentStore,
//!     enrollment::EnrollmentDraft,
//!     persist::flat_file::FlatFileSink,
//! };
//!
//! let sink = FlatFileSink::default_location();
//! let mut store = EnrollmentStore::with_sink(Box::new(sink)).expect("load");
//! store.register(EnrollmentDraft::new("Luis Gómez", "49887766", "Prog 1"));
//! for rec in store.search("gómez") {
//!     println!("{} {}", rec.name(), rec.course());
//! }
//! ```
#![deny(missing_docs)]

/// Configuration and store opening.
pub mod config;
/// Core in-memory store and summary.
pub mod core;
/// Enrollment records and registration drafts.
pub mod enrollment;
/// Persistence abstraction with flat-file and in-memory sinks.
pub mod persist;
/// Shared defaults and file-format constants.
pub mod types;
