use friends_directory_sdk::{Friendship, NewUser, User, UserPatch};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// REST DTO for user representation with serde/utoipa
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// REST DTO for creating a new user.
///
/// Missing fields decode as empty strings so that the service reports them
/// as invalid arguments instead of the extractor rejecting the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserReq {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
}

/// REST DTO for updating a user (partial)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateUserReq {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}

/// A directed friendship edge.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendshipDto {
    pub requester_id: i64,
    pub accepter_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

// Conversion implementations between REST DTOs and contract models
impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            email: user.email,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            email: req.email,
        }
    }
}

impl From<UpdateUserReq> for UserPatch {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            email: req.email,
        }
    }
}

impl From<Friendship> for FriendshipDto {
    fn from(edge: Friendship) -> Self {
        Self {
            requester_id: edge.requester_id,
            accepter_id: edge.accepter_id,
            created_at: edge.created_at,
        }
    }
}
