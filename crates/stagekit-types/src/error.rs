//! Shared error taxonomy
//!
//! Four kinds, consistently reused by every core operation. The calling
//! layer maps kinds to transport responses; the core never recovers from
//! these locally.

use thiserror::Error;

/// Errors surfaced by the auth core and the resource policies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed input, always locally detectable
    #[error("{0}")]
    BadRequest(String),

    /// Failed signature/expiry check, failed clearance/ownership gate,
    /// or wrong credentials. Deliberately opaque about which.
    #[error("{0}")]
    NotAuthorized(String),

    /// Referenced principal or resource does not exist in storage
    #[error("could not find a record with {key} = {value}")]
    NotFound { key: String, value: String },

    /// Signing failure, storage transport failure, or any unexpected
    /// condition. Detail goes to the log, never to the caller.
    #[error("something went wrong in the server")]
    Internal,
}

impl Error {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_authorized(message: impl Into<String>) -> Self {
        Self::NotAuthorized(message.into())
    }

    pub fn not_found(key: impl Into<String>, value: impl ToString) -> Self {
        Self::NotFound {
            key: key.into(),
            value: value.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotAuthorized(_) => 401,
            Self::NotFound { .. } => 404,
            Self::Internal => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotAuthorized(_) => "NOT_AUTHORIZED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal => "INTERNAL",
        }
    }
}
