//! Error types for extlint.

/// Error raised when a manifest cannot be read, parsed, or is missing
/// required fields.
///
/// Every problem detected in one validation pass is aggregated into a single
/// human-readable message, so callers handle one error kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidManifest(pub String);
