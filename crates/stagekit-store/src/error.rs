//! Storage errors

use thiserror::Error;

use stagekit_types::Error;

/// Result alias for repository operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors at the storage boundary.
///
/// `NotFound` stays distinguishable from transport failure all the way
/// up: the conversion below maps it to the caller-visible `NotFound`
/// kind while everything else collapses into `Internal`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Record not found
    #[error("could not find a record with {key} = {value}")]
    NotFound { key: String, value: String },

    /// Transport or backend failure
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(key: impl Into<String>, value: impl ToString) -> Self {
        Self::NotFound {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { key, value } => Error::NotFound { key, value },
            StoreError::Unavailable(detail) => {
                tracing::error!("storage failure: {detail}");
                Error::Internal
            }
        }
    }
}
