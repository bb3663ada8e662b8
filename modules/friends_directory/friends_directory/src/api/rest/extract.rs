//! Extractors whose rejections are problem JSON instead of axum's plain text.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::api::rest::error::Problem;

/// `Path<T>` that rejects with a 400 problem.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

/// `Json<T>` that rejects with a 400 problem.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

/// Malformed client input is an invalid argument; only axum's own
/// server-side failures keep their 5xx status.
fn rejection_problem(status: StatusCode, detail: String, instance: &str) -> Problem {
    let status = if status.is_server_error() {
        status
    } else {
        StatusCode::BAD_REQUEST
    };
    let title = status.canonical_reason().unwrap_or("Error");
    Problem::new(status, title, detail).with_instance(instance)
}

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(path_problem(&rejection, parts.uri.path())),
        }
    }
}

fn path_problem(rejection: &PathRejection, instance: &str) -> Problem {
    rejection_problem(rejection.status(), rejection.body_text(), instance)
}

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_owned();
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_problem(&rejection, &instance)),
        }
    }
}

fn json_problem(rejection: &JsonRejection, instance: &str) -> Problem {
    rejection_problem(rejection.status(), rejection.body_text(), instance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_rejections_become_bad_request() {
        let p = rejection_problem(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid type: integer `5`, expected a string".to_owned(),
            "/update/1",
        );
        assert_eq!(p.status, StatusCode::BAD_REQUEST);
        assert_eq!(p.title, "Bad Request");
        assert_eq!(p.instance, "/update/1");

        let p = rejection_problem(StatusCode::UNSUPPORTED_MEDIA_TYPE, String::new(), "/users");
        assert_eq!(p.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn server_side_rejections_keep_their_status() {
        let p = rejection_problem(
            StatusCode::INTERNAL_SERVER_ERROR,
            "No paths parameters found".to_owned(),
            "/users/1",
        );
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
