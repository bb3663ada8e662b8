use async_trait::async_trait;
use friends_directory_sdk::{Friendship, User};
use sea_orm::ConnectionTrait;

use crate::domain::error::DomainError;

/// Repository trait for directed friendship edges.
///
/// Endpoint existence is not checked here; the ordered pair is unique at the
/// storage level and a duplicate surfaces as
/// `DomainError::FriendshipAlreadyExists`.
#[async_trait]
pub trait FriendshipsRepository: Send + Sync {
    /// Insert the edge.
    async fn add<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        edge: &Friendship,
    ) -> Result<(), DomainError>;

    /// Remove the edge; `FriendshipNotFound` when it does not exist.
    async fn remove<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        requester_id: i64,
        accepter_id: i64,
    ) -> Result<(), DomainError>;

    /// Users on the accepting end of edges whose requester is `requester_id`.
    async fn list_accepted_by<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        requester_id: i64,
    ) -> Result<Vec<User>, DomainError>;

    /// Number of edges that have `user_id` on either end.
    async fn count_incident<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<u64, DomainError>;

    /// Remove every edge that has `user_id` on either end.
    async fn remove_incident<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<u64, DomainError>;
}
