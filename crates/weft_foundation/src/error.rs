//! Error types for the Weft system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::entity::EntityId;
use crate::value::ValueKind;

/// Convenience alias for results carrying a Weft [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Weft operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an entity not found error.
    #[must_use]
    pub const fn entity_not_found(id: EntityId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub const fn type_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An entity reference did not resolve against the world's id table.
    ///
    /// Signals caller misuse (a stale or foreign entity handle); the failed
    /// operation performs no mutation.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// An ordered comparison was attempted across value variants.
    ///
    /// Ordering across variants is undefined, so the comparison fails
    /// instead of returning an arbitrary ordering.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The variant of the reference value.
        expected: ValueKind,
        /// The variant actually encountered.
        actual: ValueKind,
    },
}
