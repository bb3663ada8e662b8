//! Local implementation of `DirectoryClientV1`.
//!
//! Delegates to the domain service and converts errors to SDK error types,
//! so in-process consumers never see domain or storage types.

use std::sync::Arc;

use async_trait::async_trait;
use friends_directory_sdk::{
    DirectoryClientV1, DirectoryError, Friendship, NewUser, User, UserPatch,
};

use crate::module::ConcreteService;

pub struct DirectoryLocalClient {
    service: Arc<ConcreteService>,
}

impl DirectoryLocalClient {
    /// Create a new local client wrapping the domain service.
    #[must_use]
    pub fn new(service: Arc<ConcreteService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl DirectoryClientV1 for DirectoryLocalClient {
    async fn create_user(&self, new_user: NewUser) -> Result<User, DirectoryError> {
        self.service.create_user(new_user).await.map_err(Into::into)
    }

    async fn get_user(&self, id: i64) -> Result<User, DirectoryError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        self.service.list_users().await.map_err(Into::into)
    }

    async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, DirectoryError> {
        self.service
            .update_user(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_user(&self, id: i64) -> Result<(), DirectoryError> {
        self.service.delete_user(id).await.map_err(Into::into)
    }

    async fn add_friend(
        &self,
        requester_id: i64,
        accepter_id: i64,
    ) -> Result<Friendship, DirectoryError> {
        self.service
            .add_friend(requester_id, accepter_id)
            .await
            .map_err(Into::into)
    }

    async fn remove_friend(
        &self,
        requester_id: i64,
        accepter_id: i64,
    ) -> Result<(), DirectoryError> {
        self.service
            .remove_friend(requester_id, accepter_id)
            .await
            .map_err(Into::into)
    }

    async fn list_friends(&self, requester_id: i64) -> Result<Vec<User>, DirectoryError> {
        self.service
            .list_friends(requester_id)
            .await
            .map_err(Into::into)
    }
}
