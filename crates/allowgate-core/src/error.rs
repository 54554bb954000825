//! Shared error type across allowgate crates.

use thiserror::Error;

use crate::address::Address;

/// Stable error classes (API surface for callers and logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller lacks the owner capability.
    Unauthorized,
    /// Entity already exists.
    DuplicateState,
    /// Entity does not exist.
    MissingState,
    /// Transition not legal from the current state.
    InvalidTransition,
    /// Initialization attempted twice.
    Initialization,
    /// Malformed input (addresses, config).
    BadRequest,
    /// Internal failure (I/O).
    Internal,
}

impl ErrorKind {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::DuplicateState => "DUPLICATE_STATE",
            ErrorKind::MissingState => "MISSING_STATE",
            ErrorKind::InvalidTransition => "INVALID_TRANSITION",
            ErrorKind::Initialization => "INITIALIZATION",
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AllowGateError>;

/// Unified error type used by core and proxy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllowGateError {
    #[error("caller is not the owner: {caller}")]
    Unauthorized { caller: Address },
    #[error("registry already exists: {0}")]
    ExistRegistry(Address),
    #[error("registry does not exist: {0}")]
    NotExistRegistry(Address),
    #[error("registry already paused: {0}")]
    PausedRegistry(Address),
    #[error("registry is not paused: {0}")]
    UnpausedRegistry(Address),
    #[error("account already blacklisted: {0}")]
    AccountBlacklisted(Address),
    #[error("account not blacklisted: {0}")]
    AccountNotBlacklisted(Address),
    #[error("already initialized")]
    AlreadyInitialized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AllowGateError {
    /// Map the error to its stable class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AllowGateError::Unauthorized { .. } => ErrorKind::Unauthorized,
            AllowGateError::ExistRegistry(_) | AllowGateError::AccountBlacklisted(_) => {
                ErrorKind::DuplicateState
            }
            AllowGateError::NotExistRegistry(_) | AllowGateError::AccountNotBlacklisted(_) => {
                ErrorKind::MissingState
            }
            AllowGateError::PausedRegistry(_) | AllowGateError::UnpausedRegistry(_) => {
                ErrorKind::InvalidTransition
            }
            AllowGateError::AlreadyInitialized => ErrorKind::Initialization,
            AllowGateError::BadRequest(_) => ErrorKind::BadRequest,
            AllowGateError::Internal(_) => ErrorKind::Internal,
        }
    }
}
