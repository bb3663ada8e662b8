//! Database error conversion helpers.

use std::fmt::Display;

use sea_orm::{DbErr, SqlErr};

use crate::domain::error::DomainError;

/// Convert any displayable error into a `DomainError::Database`.
pub fn db_err(e: impl Display) -> DomainError {
    DomainError::database(e.to_string())
}

/// Integrity constraint a statement tripped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Unique,
    ForeignKey,
}

/// Detect unique / foreign key violations across the supported backends.
pub fn violation(e: &DbErr) -> Option<Violation> {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Some(Violation::Unique),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => Some(Violation::ForeignKey),
        _ => None,
    }
}
