use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use friends_directory_sdk::DirectoryClientV1;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::api::rest::routes;
use crate::config::DirectoryConfig;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{OrmFriendshipsRepository, OrmUsersRepository};
use crate::local_client::DirectoryLocalClient;

/// Type alias for the concrete `Service` type used with ORM repositories.
/// This lives in the composition root to keep infra types out of the domain.
pub type ConcreteService = Service<OrmUsersRepository, OrmFriendshipsRepository>;

/// Composition root: wires repositories, the domain service, the REST router
/// and the in-process client around one database connection.
#[derive(Clone)]
pub struct FriendsDirectory {
    service: Arc<ConcreteService>,
}

impl FriendsDirectory {
    #[must_use]
    pub fn new(db: DatabaseConnection, cfg: DirectoryConfig) -> Self {
        debug!(
            max_field_length = cfg.max_field_length,
            delete_policy = ?cfg.delete_policy,
            "Initializing friends_directory module"
        );

        let service = Service::new(
            db,
            Arc::new(OrmUsersRepository::new()),
            Arc::new(OrmFriendshipsRepository::new()),
            ServiceConfig::from(cfg),
        );

        Self {
            service: Arc::new(service),
        }
    }

    /// Apply all pending schema migrations.
    ///
    /// # Errors
    /// Fails when the database rejects a migration.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running friends_directory database migrations");
        Migrator::up(db, None).await?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    #[must_use]
    pub fn service(&self) -> Arc<ConcreteService> {
        Arc::clone(&self.service)
    }

    /// The module's public API for in-process consumers.
    #[must_use]
    pub fn client(&self) -> Arc<dyn DirectoryClientV1> {
        Arc::new(DirectoryLocalClient::new(self.service()))
    }

    /// HTTP router with request tracing and a per-request deadline.
    #[must_use]
    pub fn router(&self, request_timeout: Duration) -> Router {
        info!("Registering friends_directory REST routes");
        with_http_layers(routes::register_routes(self.service()), request_timeout)
    }
}

/// Wrap `router` in the tracing and deadline layers.
///
/// A request that outlives `request_timeout` is answered with 408 and its
/// handler future is dropped, cancelling the pending query.
#[must_use]
pub fn with_http_layers(router: Router, request_timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
