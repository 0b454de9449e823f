//! Error types for the booking directory

use crate::forms::FieldErrors;
use marquee_types::RecordKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: i64 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Missing reference: {0}")]
    MissingReference(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl DirectoryError {
    pub fn not_found(kind: RecordKind, id: i64) -> Self {
        DirectoryError::NotFound { kind, id }
    }

    /// True for every failure raised while talking to the store.
    ///
    /// Callers that only show a generic notice treat all of these alike.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            DirectoryError::Conflict(_)
                | DirectoryError::MissingReference(_)
                | DirectoryError::Store(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound { .. })
    }
}

impl From<FieldErrors> for DirectoryError {
    fn from(errors: FieldErrors) -> Self {
        DirectoryError::Validation(errors)
    }
}
