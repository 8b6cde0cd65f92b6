//! Error types for queries, key parsing and interactions.

use thiserror::Error;

use crate::event::EventName;

/// Error type returned by application event handlers.
pub type BoxError = Box<dyn std::error::Error + 'static>;

/// Result returned by application event handlers.
pub type HandlerResult = Result<(), BoxError>;

/// Malformed special-key syntax in an input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// A `{` with no closing `}`.
    #[error("unterminated key token starting at position {position} in \"{input}\"")]
    Unterminated { input: String, position: usize },

    /// A bracketed name that is not a known special key.
    #[error("unknown key \"{{{name}}}\" in \"{input}\"")]
    UnknownKey { input: String, name: String },
}

/// Returned when parsing an unrecognised event name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event name \"{0}\"")]
pub struct UnknownEventName(pub String);

/// Failed element lookup in a render tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unable to find an element with testID: {test_id}")]
    NoMatch { test_id: String },
}

/// Error surfaced by a user interaction (`type_text`, `press`, ...).
#[derive(Debug, Error)]
pub enum UserEventError {
    /// The element kind does not support the interaction.
    #[error(
        "{interaction}() works only with host \"{expected}\" elements. Passed element has type \"{actual}\"."
    )]
    TypeMismatch {
        interaction: &'static str,
        expected: String,
        actual: String,
    },

    #[error(transparent)]
    KeyParse(#[from] KeyParseError),

    /// An application handler returned an error. Remaining steps were abandoned.
    #[error("handler for \"{event}\" failed: {source}")]
    Handler {
        event: EventName,
        #[source]
        source: BoxError,
    },
}

pub type Result<T, E = UserEventError> = std::result::Result<T, E>;
