use thiserror::Error;

use skillbridge_core::DomainError;

/// Storage-layer error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("duplicate value for constraint '{0}'")]
    Duplicate(&'static str),

    /// No row exists for the targeted id.
    #[error("no row for the targeted id")]
    Missing,

    /// Backend failure (lock poisoned, connection lost, ...).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(constraint) => {
                DomainError::conflict(format!("duplicate value for constraint '{constraint}'"))
            }
            StoreError::Missing => DomainError::NotFound,
            StoreError::Backend(msg) => DomainError::storage(msg),
        }
    }
}
