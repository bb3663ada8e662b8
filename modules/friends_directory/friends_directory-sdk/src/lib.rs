//! Friends Directory SDK
//!
//! This crate provides the public API for the `friends_directory` module:
//! - `DirectoryClientV1` trait
//! - Model types for users, user patches and friendship edges
//! - Error type (`DirectoryError`) and its classification (`ErrorKind`)
//!
//! ## Usage
//!
//! ```ignore
//! use friends_directory_sdk::{DirectoryClientV1, NewUser};
//!
//! let alice = client.create_user(NewUser::new("Alice", "Smith", "a@x.com")).await?;
//! let bob = client.create_user(NewUser::new("Bob", "Jones", "b@x.com")).await?;
//! client.add_friend(alice.id, bob.id).await?;
//! let friends = client.list_friends(alice.id).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod errors;
pub mod models;

pub use client::DirectoryClientV1;
pub use errors::{DirectoryError, ErrorKind};
pub use models::{Friendship, NewUser, User, UserPatch};
