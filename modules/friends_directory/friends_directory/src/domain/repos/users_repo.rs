use async_trait::async_trait;
use friends_directory_sdk::{NewUser, User};
use sea_orm::ConnectionTrait;

use crate::domain::error::DomainError;

/// Repository trait for User persistence operations.
///
/// The store knows nothing about friendships. Email uniqueness is enforced by
/// a unique index; a violation surfaces as `DomainError::EmailAlreadyExists`.
///
/// All methods accept `conn: &C`, either a pooled `DatabaseConnection` or a
/// `DatabaseTransaction`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Insert a new user and return the generated id.
    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user: &NewUser,
    ) -> Result<i64, DomainError>;

    /// Find a user by ID.
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<User>, DomainError>;

    /// All users, ordered by id.
    async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<User>, DomainError>;

    /// Overwrite the full stored row identified by `user.id`.
    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user: &User,
    ) -> Result<(), DomainError>;

    /// Delete a user by ID. Returns the number of rows removed (0 when absent).
    async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<u64, DomainError>;

    /// Check if a user with the given ID exists. Negative ids are rejected.
    async fn exists<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<bool, DomainError>;

    /// Check if any user owns `email`.
    async fn email_exists<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
    ) -> Result<bool, DomainError>;
}
