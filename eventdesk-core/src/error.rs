//! Error types for eventdesk.

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur in eventdesk operations.
///
/// None of these are fatal: the presentation layer reports them and
/// re-prompts.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    NotFound(EventId),

    #[error("Malformed date/time: {0}")]
    MalformedDate(String),

    #[error("Unknown category '{0}'. Expected one of: Meeting, Conference, Workshop, Social, Other")]
    UnknownCategory(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for eventdesk operations.
pub type EventResult<T> = Result<T, EventError>;
