//! Error types for rentdesk.
//!
//! Every failure a store can produce is one of the variants of [`Error`].
//! Remote failures are caught at the store boundary and wrapped as
//! [`Error::Fetch`] or [`Error::Write`], so callers only ever see typed
//! results and decide for themselves how to notify the user.

use std::fmt;

use thiserror::Error;

/// The unified error type for rentdesk operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing or invalid. Detected before any network call.
    #[error("validation failed for {resource}: {source}")]
    Validation {
        resource: &'static str,
        #[source]
        source: ValidationError,
    },

    /// An operation was invoked without the identifier it needs.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// Loading a collection from the remote endpoint failed.
    #[error("failed to load {resource}: {source}")]
    Fetch {
        resource: &'static str,
        #[source]
        source: TransportError,
    },

    /// A create, update or delete was rejected or never reached the server.
    #[error("failed to {operation} {resource}: {source}")]
    Write {
        resource: &'static str,
        operation: WriteOperation,
        #[source]
        source: TransportError,
    },

    /// Input validation errors (malformed URL or identifier).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if the failure happened locally, without any network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. } | Error::Precondition(_) | Error::InvalidInput(_)
        )
    }
}

/// The kind of mutation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOperation::Create => write!(f, "create"),
            WriteOperation::Update => write!(f, "update"),
            WriteOperation::Delete => write!(f, "delete"),
        }
    }
}

/// Transport-level errors raised by a [`Transport`](crate::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status}{}", body_suffix(.body))]
    Status { status: u16, body: Option<String> },

    /// The request body could not be encoded.
    #[error("could not encode request: {message}")]
    Encode { message: String },

    /// The response body could not be decoded.
    #[error("malformed response: {message}")]
    Decode { message: String },
}

impl TransportError {
    /// Build a decode error from anything printable.
    pub fn decode(message: impl fmt::Display) -> Self {
        TransportError::Decode {
            message: message.to_string(),
        }
    }

    /// Returns the HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::decode(err)
    }
}

fn body_suffix(body: &Option<String>) -> String {
    match body.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!(": {text}"),
        _ => String::new(),
    }
}

/// A field failed its local check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty, zero or unset.
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// A field is present but malformed.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// An operation was called without a required identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("cannot update {resource} without an id")]
    MissingId { resource: &'static str },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid record identifier.
    #[error("invalid record id '{value}': {reason}")]
    RecordId { value: String, reason: String },
}
