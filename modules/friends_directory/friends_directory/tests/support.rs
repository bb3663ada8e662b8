#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for `friends_directory` integration tests.
//!
//! Provides an in-memory database with migrations applied, a wired module,
//! and seeding helpers.

#![allow(dead_code)] // Support module provides utilities that may not all be used

use std::sync::Arc;

use friends_directory::domain::repos::UsersRepository;
use friends_directory::infra::storage::OrmUsersRepository;
use friends_directory::module::ConcreteService;
use friends_directory::{DeletePolicy, DirectoryConfig, FriendsDirectory, NewUser};
use sea_orm::{Database, DatabaseConnection};

/// Create an in-memory `SQLite` database with the schema applied.
pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");
    FriendsDirectory::migrate(&db)
        .await
        .expect("Failed to run migrations");
    db
}

/// Insert a user straight through the store, bypassing the service checks.
pub async fn seed_user(db: &DatabaseConnection, name: &str, surname: &str, email: &str) -> i64 {
    OrmUsersRepository::new()
        .create(db, &NewUser::new(name, surname, email))
        .await
        .expect("Failed to seed user")
}

pub struct TestContext {
    pub db: DatabaseConnection,
    pub module: FriendsDirectory,
    pub service: Arc<ConcreteService>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_config(DirectoryConfig::default()).await
    }

    pub async fn with_policy(delete_policy: DeletePolicy) -> Self {
        Self::with_config(DirectoryConfig {
            delete_policy,
            ..DirectoryConfig::default()
        })
        .await
    }

    pub async fn with_config(cfg: DirectoryConfig) -> Self {
        let db = inmem_db().await;
        let module = FriendsDirectory::new(db.clone(), cfg);
        let service = module.service();
        Self {
            db,
            module,
            service,
        }
    }

    /// Alice (1) and Bob (2).
    pub async fn alice_and_bob(&self) -> (i64, i64) {
        let alice = seed_user(&self.db, "Alice", "Smith", "a@x.com").await;
        let bob = seed_user(&self.db, "Bob", "Jones", "b@x.com").await;
        (alice, bob)
    }
}
