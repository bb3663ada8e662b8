use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use crate::api::rest::dto::{CreateUserReq, FriendshipDto, HealthDto, UpdateUserReq, UserDto};
use crate::api::rest::error::Problem;
use crate::api::rest::handlers;
use crate::module::ConcreteService;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Friends Directory API",
        description = "Users and directed friendships"
    ),
    paths(
        handlers::list_users,
        handlers::get_user,
        handlers::create_user,
        handlers::update_user,
        handlers::delete_user,
        handlers::make_friend,
        handlers::remove_friend,
        handlers::list_friends,
        handlers::health,
    ),
    components(schemas(UserDto, CreateUserReq, UpdateUserReq, FriendshipDto, HealthDto, Problem)),
    tags(
        (name = "users", description = "User management"),
        (name = "friends", description = "Directed friendships"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Route table of the service. The domain service is injected as an extension.
#[must_use]
pub fn register_routes(service: Arc<ConcreteService>) -> Router {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/users/{id}", get(handlers::get_user))
        .route("/update/{id}", put(handlers::update_user))
        .route("/delete/{id}", delete(handlers::delete_user))
        .route(
            "/users/{id1}/make_friend/{id2}",
            post(handlers::make_friend),
        )
        .route(
            "/users/{id1}/remove_friend/{id2}",
            delete(handlers::remove_friend),
        )
        .route("/users/{id}/friends", get(handlers::list_friends))
        .route("/health", get(handlers::health))
        .route(OPENAPI_PATH, get(openapi_json))
        .layer(Extension(service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/users",
            "/users/{id}",
            "/update/{id}",
            "/delete/{id}",
            "/users/{id1}/make_friend/{id2}",
            "/users/{id1}/remove_friend/{id2}",
            "/users/{id}/friends",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
