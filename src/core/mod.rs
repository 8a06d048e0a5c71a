//! In-memory enrollment store and its summary view.

/// Authoritative enrollment store.
pub mod store;
/// Per-course count summary.
pub mod summary;
