//! Infrastructure storage layer - database persistence.
//!
//! ## Architecture
//!
//! This module contains ALL `SeaORM`-specific code and database operations:
//! - `entity/` - `SeaORM` entity definitions (users, friendships)
//! - `mapper.rs` - Conversions between `SeaORM` models and SDK contract types
//! - `db.rs` - Classification of driver errors into `DomainError`
//! - `migrations/` - Versioned database schema
//!
//! ## Layering Rules
//!
//! The infrastructure layer:
//! - **Contains**: ALL `SeaORM` entity and query code
//! - **Uses**: `friends_directory_sdk` contract types as the domain model
//! - **Implements**: the repository ports from `domain::repos`

pub mod entity;
pub mod mapper;
pub mod migrations;

mod db;
mod friendships_sea_repo;
mod users_sea_repo;

pub use friendships_sea_repo::OrmFriendshipsRepository;
pub use users_sea_repo::OrmUsersRepository;
