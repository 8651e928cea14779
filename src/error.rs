use thiserror::Error;

/// Failure taxonomy for the two stores. Anything other than the two
/// credential cases is a storage-backend failure; malformed persisted data
/// is never an error (it degrades to empty on read).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
