use friends_directory_sdk::{NewUser, User, UserPatch};
use sea_orm::TransactionTrait;
use tracing::{debug, info, instrument};

use super::Service;
use crate::config::DeletePolicy;
use crate::domain::error::DomainError;
use crate::domain::repos::{FriendshipsRepository, UsersRepository};

impl<UR, FR> Service<UR, FR>
where
    UR: UsersRepository,
    FR: FriendshipsRepository,
{
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        self.validate_new_user(&new_user)?;

        if self.users.email_exists(&self.db, &new_user.email).await? {
            return Err(DomainError::email_already_exists(new_user.email));
        }

        let id = self.users.create(&self.db, &new_user).await?;

        let NewUser {
            name,
            surname,
            email,
        } = new_user;
        info!(user.id = id, "Created user");
        Ok(User {
            id,
            name,
            surname,
            email,
        })
    }

    #[instrument(skip(self), fields(user.id = id))]
    pub async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        debug!("Getting user by id");
        Self::validate_id(id)?;

        self.users
            .get(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.list(&self.db).await?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Merge the supplied fields of `patch` into the stored user.
    ///
    /// Absent and blank fields keep their stored value.
    #[instrument(skip(self, patch), fields(user.id = id))]
    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, DomainError> {
        info!("Updating user");

        Self::validate_id(id)?;
        self.validate_user_patch(&patch)?;

        let mut current = self
            .users
            .get(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        if let Some(email) = patch.email()
            && email != current.email
            && self.users.email_exists(&self.db, email).await?
        {
            return Err(DomainError::email_already_exists(email));
        }

        if let Some(name) = patch.name() {
            name.clone_into(&mut current.name);
        }
        if let Some(surname) = patch.surname() {
            surname.clone_into(&mut current.surname);
        }
        if let Some(email) = patch.email() {
            email.clone_into(&mut current.email);
        }

        self.users.update(&self.db, &current).await?;

        info!("Updated user");
        Ok(current)
    }

    /// Delete a user according to the configured [`DeletePolicy`].
    #[instrument(skip(self), fields(user.id = id, policy = ?self.config.delete_policy))]
    pub async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        info!("Deleting user");

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        let edges = match self.config.delete_policy {
            DeletePolicy::Cascade => self.friendships.remove_incident(&txn, id).await?,
            DeletePolicy::Restrict => {
                let edges = self.friendships.count_incident(&txn, id).await?;
                if edges > 0 {
                    debug!(edges, "Refusing to delete user with friendships");
                    return Err(DomainError::user_has_friendships(id));
                }
                0
            }
        };

        if self.users.delete(&txn, id).await? == 0 {
            return Err(DomainError::user_not_found(id));
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!(edges_removed = edges, "Deleted user");
        Ok(())
    }

    fn validate_new_user(&self, new_user: &NewUser) -> Result<(), DomainError> {
        self.validate_required("name", &new_user.name)?;
        self.validate_required("surname", &new_user.surname)?;
        self.validate_required("email", &new_user.email)?;
        Ok(())
    }

    fn validate_user_patch(&self, patch: &UserPatch) -> Result<(), DomainError> {
        if patch.is_noop() {
            return Err(DomainError::EmptyPatch);
        }
        if let Some(name) = patch.name() {
            self.validate_length("name", name)?;
        }
        if let Some(surname) = patch.surname() {
            self.validate_length("surname", surname)?;
        }
        if let Some(email) = patch.email() {
            self.validate_length("email", email)?;
        }
        Ok(())
    }
}
