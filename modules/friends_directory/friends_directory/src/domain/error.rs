use friends_directory_sdk::{DirectoryError, ErrorKind};
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid user id: {id}")]
    InvalidId { id: i64 },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: &'static str },

    #[error("Field '{field}' too long: {len} characters (max: {max})")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Update must supply at least one of name, surname, email")]
    EmptyPatch,

    #[error("A user cannot befriend itself: {id}")]
    SelfFriendship { id: i64 },

    #[error("User not found: {id}")]
    UserNotFound { id: i64 },

    #[error("Friendship {requester_id} -> {accepter_id} not found")]
    FriendshipNotFound { requester_id: i64, accepter_id: i64 },

    #[error("Friendship {requester_id} -> {accepter_id} references a missing user")]
    MissingEndpoint { requester_id: i64, accepter_id: i64 },

    #[error("User with email '{email}' already exists")]
    EmailAlreadyExists { email: String },

    #[error("Friendship {requester_id} -> {accepter_id} already exists")]
    FriendshipAlreadyExists { requester_id: i64, accepter_id: i64 },

    #[error("User {id} still has friendships")]
    UserHasFriendships { id: i64 },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    #[must_use]
    pub fn invalid_id(id: i64) -> Self {
        Self::InvalidId { id }
    }

    #[must_use]
    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field }
    }

    #[must_use]
    pub fn field_too_long(field: &'static str, len: usize, max: usize) -> Self {
        Self::FieldTooLong { field, len, max }
    }

    #[must_use]
    pub fn self_friendship(id: i64) -> Self {
        Self::SelfFriendship { id }
    }

    #[must_use]
    pub fn user_not_found(id: i64) -> Self {
        Self::UserNotFound { id }
    }

    #[must_use]
    pub fn friendship_not_found(requester_id: i64, accepter_id: i64) -> Self {
        Self::FriendshipNotFound {
            requester_id,
            accepter_id,
        }
    }

    #[must_use]
    pub fn missing_endpoint(requester_id: i64, accepter_id: i64) -> Self {
        Self::MissingEndpoint {
            requester_id,
            accepter_id,
        }
    }

    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    #[must_use]
    pub fn friendship_already_exists(requester_id: i64, accepter_id: i64) -> Self {
        Self::FriendshipAlreadyExists {
            requester_id,
            accepter_id,
        }
    }

    #[must_use]
    pub fn user_has_friendships(id: i64) -> Self {
        Self::UserHasFriendships { id }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Taxonomy bucket this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidId { .. }
            | Self::EmptyField { .. }
            | Self::FieldTooLong { .. }
            | Self::EmptyPatch
            | Self::SelfFriendship { .. } => ErrorKind::InvalidArgument,
            Self::UserNotFound { .. }
            | Self::FriendshipNotFound { .. }
            | Self::MissingEndpoint { .. } => ErrorKind::NotFound,
            Self::EmailAlreadyExists { .. } | Self::FriendshipAlreadyExists { .. } => {
                ErrorKind::AlreadyExists
            }
            Self::UserHasFriendships { .. } => ErrorKind::Conflict,
            Self::Database { .. } => ErrorKind::Internal,
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for DirectoryError {
    fn from(domain_error: DomainError) -> Self {
        let message = domain_error.to_string();
        match domain_error.kind() {
            ErrorKind::InvalidArgument => DirectoryError::invalid_argument(message),
            ErrorKind::NotFound => DirectoryError::not_found(message),
            ErrorKind::AlreadyExists => DirectoryError::already_exists(message),
            ErrorKind::Conflict => DirectoryError::conflict(message),
            ErrorKind::Internal => DirectoryError::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_do_not_leak_details() {
        let err: DirectoryError =
            DomainError::database("connection refused (os error 111)").into();
        assert_eq!(err, DirectoryError::Internal);
    }

    #[test]
    fn classification_covers_taxonomy() {
        assert_eq!(
            DomainError::self_friendship(1).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(DomainError::EmptyPatch.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            DomainError::missing_endpoint(1, 2).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            DomainError::friendship_already_exists(1, 2).kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            DomainError::user_has_friendships(1).kind(),
            ErrorKind::Conflict
        );
    }

    #[test]
    fn sdk_error_keeps_domain_message() {
        let err: DirectoryError = DomainError::email_already_exists("a@x.com").into();
        assert_eq!(
            err,
            DirectoryError::already_exists("User with email 'a@x.com' already exists")
        );
    }
}
