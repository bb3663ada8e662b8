//! Public models for the `friends_directory` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `friends_directory` module and its consumers.

use time::OffsetDateTime;

/// A user entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Data for creating a new user. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl NewUser {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }
}

/// Partial update data for a user.
///
/// A field that is `None` or blank means "leave unchanged".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// New name, if the patch actually supplies one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        supplied(self.name.as_deref())
    }

    /// New surname, if the patch actually supplies one.
    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        supplied(self.surname.as_deref())
    }

    /// New email, if the patch actually supplies one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        supplied(self.email.as_deref())
    }

    /// True when no field would change anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.name().is_none() && self.surname().is_none() && self.email().is_none()
    }
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A directed friendship edge: `requester_id` -> `accepter_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub requester_id: i64,
    pub accepter_id: i64,
    pub created_at: OffsetDateTime,
}
