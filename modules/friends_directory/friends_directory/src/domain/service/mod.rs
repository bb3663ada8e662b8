//! Domain service layer - the rules that span both stores.
//!
//! The stores are individually atomic; the checks here (unique email,
//! existing endpoints, no self-friendship, merge-on-update) are advisory and
//! run before the mutation. The storage constraints remain the backstop, so a
//! racing writer still gets `AlreadyExists` rather than `Internal`.
//!
//! Operations are split per resource:
//! - `users` - create/get/list/update/delete
//! - `friendships` - add/remove/list friends

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{DeletePolicy, DirectoryConfig};
use crate::domain::error::DomainError;
use crate::domain::repos::{FriendshipsRepository, UsersRepository};

mod friendships;
mod users;

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_field_length: usize,
    pub delete_policy: DeletePolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        DirectoryConfig::default().into()
    }
}

impl From<DirectoryConfig> for ServiceConfig {
    fn from(cfg: DirectoryConfig) -> Self {
        Self {
            max_field_length: cfg.max_field_length,
            delete_policy: cfg.delete_policy,
        }
    }
}

/// Domain service orchestrating the user and friendship stores.
///
/// Holds no per-call state; every operation re-reads what it needs.
pub struct Service<UR, FR>
where
    UR: UsersRepository,
    FR: FriendshipsRepository,
{
    db: DatabaseConnection,
    users: Arc<UR>,
    friendships: Arc<FR>,
    config: ServiceConfig,
}

impl<UR, FR> Service<UR, FR>
where
    UR: UsersRepository,
    FR: FriendshipsRepository,
{
    /// Create a service with dependencies.
    #[must_use]
    pub fn new(
        db: DatabaseConnection,
        users: Arc<UR>,
        friendships: Arc<FR>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            db,
            users,
            friendships,
            config,
        }
    }

    fn validate_id(id: i64) -> Result<(), DomainError> {
        if id < 0 {
            return Err(DomainError::invalid_id(id));
        }
        Ok(())
    }

    fn validate_required(&self, field: &'static str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::empty_field(field));
        }
        self.validate_length(field, value)
    }

    fn validate_length(&self, field: &'static str, value: &str) -> Result<(), DomainError> {
        let len = value.chars().count();
        if len > self.config.max_field_length {
            return Err(DomainError::field_too_long(
                field,
                len,
                self.config.max_field_length,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use std::sync::Arc;

    use friends_directory_sdk::NewUser;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;
    use tracing_test::traced_test;

    use super::{Service, ServiceConfig};
    use crate::config::DeletePolicy;
    use crate::domain::error::DomainError;
    use crate::infra::storage::migrations::Migrator;
    use crate::infra::storage::{OrmFriendshipsRepository, OrmUsersRepository};

    async fn service(
        config: ServiceConfig,
    ) -> Service<OrmUsersRepository, OrmFriendshipsRepository> {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        Service::new(
            db,
            Arc::new(OrmUsersRepository::new()),
            Arc::new(OrmFriendshipsRepository::new()),
            config,
        )
    }

    #[test]
    fn default_config_cascades() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.delete_policy, DeletePolicy::Cascade);
        assert_eq!(cfg.max_field_length, 255);
    }

    #[tokio::test]
    #[traced_test]
    async fn create_user_is_logged() {
        let svc = service(ServiceConfig::default()).await;
        let user = svc
            .create_user(NewUser::new("Alice", "Smith", "a@x.com"))
            .await
            .unwrap();

        assert!(logs_contain("Created user"));
        assert!(logs_contain(&format!("user.id={}", user.id)));
    }

    #[tokio::test]
    async fn length_limit_counts_characters() {
        let svc = service(ServiceConfig {
            max_field_length: 3,
            ..ServiceConfig::default()
        })
        .await;

        // three characters, six bytes
        svc.create_user(NewUser::new("éé", "ñññ", "a@b"))
            .await
            .unwrap();

        let err = svc
            .create_user(NewUser::new("Anna", "B", "c@d"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::FieldTooLong {
                field: "name",
                len: 4,
                max: 3
            }
        ));
    }
}
