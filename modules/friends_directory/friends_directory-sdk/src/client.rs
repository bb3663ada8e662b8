//! Object-safe client boundary for the `friends_directory` module.
//!
//! Consumers hold an `Arc<dyn DirectoryClientV1>`; the in-process
//! implementation lives in the `friends_directory` crate.

use async_trait::async_trait;

use crate::errors::DirectoryError;
use crate::models::{Friendship, NewUser, User, UserPatch};

#[async_trait]
pub trait DirectoryClientV1: Send + Sync {
    /// Create a user. Fails with `AlreadyExists` when the email is taken.
    async fn create_user(&self, new_user: NewUser) -> Result<User, DirectoryError>;

    /// Get a single user by ID.
    async fn get_user(&self, id: i64) -> Result<User, DirectoryError>;

    /// List all users.
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;

    /// Merge the supplied fields of `patch` into the stored user.
    async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, DirectoryError>;

    /// Delete a user by ID.
    async fn delete_user(&self, id: i64) -> Result<(), DirectoryError>;

    /// Create the directed edge `requester_id -> accepter_id`.
    async fn add_friend(
        &self,
        requester_id: i64,
        accepter_id: i64,
    ) -> Result<Friendship, DirectoryError>;

    /// Remove the directed edge `requester_id -> accepter_id`.
    async fn remove_friend(
        &self,
        requester_id: i64,
        accepter_id: i64,
    ) -> Result<(), DirectoryError>;

    /// Users accepted by `requester_id`.
    async fn list_friends(&self, requester_id: i64) -> Result<Vec<User>, DirectoryError>;
}
