use std::sync::Arc;

use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use tracing::info;

use crate::api::rest::dto::{CreateUserReq, FriendshipDto, HealthDto, UpdateUserReq, UserDto};
use crate::api::rest::error::{ApiResult, Problem, at};
use crate::api::rest::extract::{ApiJson, ApiPath};
use crate::module::ConcreteService;

/// List all users ordered by id
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [UserDto]),
        (status = 500, description = "Storage failure", body = Problem)
    )
)]
#[tracing::instrument(skip(svc, uri))]
pub async fn list_users(
    uri: Uri,
    Extension(svc): Extension<Arc<ConcreteService>>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let users = svc.list_users().await.map_err(at(&uri))?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 400, description = "Negative or malformed id", body = Problem),
        (status = 404, description = "No such user", body = Problem)
    )
)]
#[tracing::instrument(skip(svc, uri), fields(user.id = id))]
pub async fn get_user(
    uri: Uri,
    Extension(svc): Extension<Arc<ConcreteService>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<UserDto>> {
    let user = svc.get_user(id).await.map_err(at(&uri))?;
    Ok(Json(UserDto::from(user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserReq,
    responses(
        (status = 201, description = "Created", body = UserDto),
        (status = 400, description = "Empty or oversized field, or malformed body", body = Problem),
        (status = 409, description = "Email already in use", body = Problem)
    )
)]
#[tracing::instrument(skip(svc, uri, req_body), fields(user.email = %req_body.email))]
pub async fn create_user(
    uri: Uri,
    Extension(svc): Extension<Arc<ConcreteService>>,
    ApiJson(req_body): ApiJson<CreateUserReq>,
) -> ApiResult<impl IntoResponse> {
    let user = svc.create_user(req_body.into()).await.map_err(at(&uri))?;
    info!(user.id = user.id, "User created via REST");
    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Update a user; omitted or empty fields keep their value
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserReq,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Nothing to update, or malformed body", body = Problem),
        (status = 404, description = "No such user", body = Problem),
        (status = 409, description = "Email already in use", body = Problem)
    )
)]
#[tracing::instrument(skip(svc, uri, req_body), fields(user.id = id))]
pub async fn update_user(
    uri: Uri,
    Extension(svc): Extension<Arc<ConcreteService>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req_body): ApiJson<UpdateUserReq>,
) -> ApiResult<Json<UserDto>> {
    let user = svc
        .update_user(id, req_body.into())
        .await
        .map_err(at(&uri))?;
    Ok(Json(UserDto::from(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such user", body = Problem),
        (status = 409, description = "User still has friendships", body = Problem)
    )
)]
#[tracing::instrument(skip(svc, uri), fields(user.id = id))]
pub async fn delete_user(
    uri: Uri,
    Extension(svc): Extension<Arc<ConcreteService>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    svc.delete_user(id).await.map_err(at(&uri))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Make `id2` a friend of `id1`
#[utoipa::path(
    post,
    path = "/users/{id1}/make_friend/{id2}",
    tag = "friends",
    params(
        ("id1" = i64, Path, description = "Requester id"),
        ("id2" = i64, Path, description = "Accepter id")
    ),
    responses(
        (status = 201, description = "Edge created", body = FriendshipDto),
        (status = 400, description = "Self-friendship or negative id", body = Problem),
        (status = 404, description = "Either user is missing", body = Problem),
        (status = 409, description = "Edge already exists", body = Problem)
    )
)]
#[tracing::instrument(skip(svc, uri))]
pub async fn make_friend(
    uri: Uri,
    Extension(svc): Extension<Arc<ConcreteService>>,
    ApiPath((id1, id2)): ApiPath<(i64, i64)>,
) -> ApiResult<impl IntoResponse> {
    let edge = svc.add_friend(id1, id2).await.map_err(at(&uri))?;
    Ok((StatusCode::CREATED, Json(FriendshipDto::from(edge))))
}

/// Remove the edge `id1 -> id2`
#[utoipa::path(
    delete,
    path = "/users/{id1}/remove_friend/{id2}",
    tag = "friends",
    params(
        ("id1" = i64, Path, description = "Requester id"),
        ("id2" = i64, Path, description = "Accepter id")
    ),
    responses(
        (status = 204, description = "Edge removed"),
        (status = 400, description = "Self-friendship or negative id", body = Problem),
        (status = 404, description = "User or edge is missing", body = Problem)
    )
)]
#[tracing::instrument(skip(svc, uri))]
pub async fn remove_friend(
    uri: Uri,
    Extension(svc): Extension<Arc<ConcreteService>>,
    ApiPath((id1, id2)): ApiPath<(i64, i64)>,
) -> ApiResult<StatusCode> {
    svc.remove_friend(id1, id2).await.map_err(at(&uri))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Users that `id` has befriended
#[utoipa::path(
    get,
    path = "/users/{id}/friends",
    tag = "friends",
    params(("id" = i64, Path, description = "Requester id")),
    responses(
        (status = 200, description = "Accepters of the user's edges", body = [UserDto]),
        (status = 404, description = "No such user", body = Problem)
    )
)]
#[tracing::instrument(skip(svc, uri), fields(user.id = id))]
pub async fn list_friends(
    uri: Uri,
    Extension(svc): Extension<Arc<ConcreteService>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let friends = svc.list_friends(id).await.map_err(at(&uri))?;
    Ok(Json(friends.into_iter().map(UserDto::from).collect()))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthDto))
)]
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy".to_owned(),
    })
}
