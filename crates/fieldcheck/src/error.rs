// File: src/error.rs
// Purpose: Library error type

use thiserror::Error;

/// Setup and dispatch errors.
///
/// Validation outcomes are not errors; they are rendered messages. This
/// type only covers broken wiring between the validator, the form, and
/// the display slots.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bound or targeted field id does not exist in the form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A render targeted a field with no registered display slot
    /// (strict slot policy only).
    #[error("no display slot registered for field: {0}")]
    MissingSlot(String),
}
