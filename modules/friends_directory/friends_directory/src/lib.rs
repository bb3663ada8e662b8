//! Friends Directory Module
//!
//! Users and directed friendship edges over a relational store, with the
//! cross-entity rules (unique email, existing endpoints, no self-friendship,
//! merge-on-update) enforced in the domain service.
//!
//! ## Public API
//!
//! The public API is defined in the `friends_directory-sdk` crate and re-exported here:
//! - `DirectoryClientV1` - trait for in-process consumers
//! - `User`, `NewUser`, `UserPatch`, `Friendship` - data models
//! - `DirectoryError`, `ErrorKind` - error types
//!
//! The composition root is [`FriendsDirectory`]: it wires the repositories,
//! the service, the REST router and the local client.
// === PUBLIC API (from SDK) ===
pub use friends_directory_sdk::{
    DirectoryClientV1, DirectoryError, ErrorKind, Friendship, NewUser, User, UserPatch,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::FriendsDirectory;

pub mod config;
pub use config::{DeletePolicy, DirectoryConfig};

// === LOCAL CLIENT ===
pub mod local_client;

// === INTERNAL MODULES ===
// Exposed for integration tests; external consumers should stick to the SDK types.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
