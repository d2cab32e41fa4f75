//! Domain-level error types.

use thiserror::Error;

/// A validation failure scoped to a single form field.
///
/// These are shown inline next to the offending field and never reach the
/// network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Store-level errors, produced by `RecordStore` adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("response was not a record sequence")]
    UnexpectedShape,

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// A create or update request that did not produce an accepted record.
///
/// Users only ever see a generic notice for these; the cause is logged.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The reply was missing one of title, author or content.
    #[error("reply failed the success check")]
    IncompleteReply,
}

/// Why a create or update submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("validation failed")]
    Invalid(Vec<FieldError>),

    #[error("at least one field is required")]
    EmptyPatch,

    #[error(transparent)]
    Request(#[from] RequestError),
}
