//! REST adapter: axum handlers over the domain service.
//!
//! The layer only translates. DTOs in, DTOs out, `DomainError` to problem
//! JSON; every rule lives in `domain::service`.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use routes::ApiDoc;
