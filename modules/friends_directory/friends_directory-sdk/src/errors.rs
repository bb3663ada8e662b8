//! Public error types for the `friends_directory` module.
//!
//! These errors are safe to expose to other modules and consumers. Every
//! failure is classified into exactly one [`ErrorKind`].

use thiserror::Error;

/// Classification of a failure, independent of the entity involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed id, empty required field, self-friendship.
    InvalidArgument,
    /// User or edge absent.
    NotFound,
    /// Duplicate email or duplicate edge.
    AlreadyExists,
    /// The operation is refused because of the current state of related rows.
    Conflict,
    /// Storage or connectivity failure.
    Internal,
}

/// Errors that can be returned by the `DirectoryClientV1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Already exists: {message}")]
    AlreadyExists { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error")]
    Internal,
}

impl DirectoryError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Internal => ErrorKind::Internal,
        }
    }
}
