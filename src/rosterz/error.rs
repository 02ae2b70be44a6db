use thiserror::Error;

use crate::validation::ValidationError;

/// Failures the roster core can report.
///
/// Errors are always returned as values; nothing panics across the library
/// boundary, and a failed operation leaves all state exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A name or id failed format validation. Carries the field so the
    /// caller can route the error to the right input.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The id is already held by another record.
    #[error("id {0} already in use")]
    DuplicateId(String),

    /// The caller passed an index the roster does not contain. This is a
    /// stale-index contract violation, not a user mistake: callers are
    /// expected to re-derive indices from the latest delta.
    #[error("index {index} out of range (roster holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The undo buffer holds nothing to restore.
    #[error("no deletion available to undo")]
    UndoUnavailable,
}

pub type Result<T> = std::result::Result<T, RosterError>;
