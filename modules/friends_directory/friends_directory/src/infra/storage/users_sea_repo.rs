use async_trait::async_trait;
use friends_directory_sdk::{NewUser, User};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::repos::UsersRepository;
use crate::infra::storage::db::{Violation, db_err, violation};
use crate::infra::storage::entity::user::{ActiveModel as UserAM, Column, Entity as UserEntity};

/// ORM-based implementation of the `UsersRepository` trait.
#[derive(Clone, Default)]
pub struct OrmUsersRepository;

impl OrmUsersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Unique violations on `users` can only come from the email index.
fn write_err(e: DbErr, email: &str) -> DomainError {
    match violation(&e) {
        Some(Violation::Unique) => DomainError::email_already_exists(email),
        _ => db_err(e),
    }
}

#[async_trait]
impl UsersRepository for OrmUsersRepository {
    #[instrument(
        name = "friends_directory.repo.users.create",
        skip(self, conn, user),
        fields(db.operation = "INSERT", user.email = %user.email)
    )]
    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user: &NewUser,
    ) -> Result<i64, DomainError> {
        let m = UserAM {
            id: NotSet,
            name: Set(user.name.clone()),
            surname: Set(user.surname.clone()),
            email: Set(user.email.clone()),
        };

        let res = UserEntity::insert(m)
            .exec(conn)
            .await
            .map_err(|e| write_err(e, &user.email))?;

        debug!(user.id = res.last_insert_id, "Inserted user row");
        Ok(res.last_insert_id)
    }

    #[instrument(
        name = "friends_directory.repo.users.get",
        skip(self, conn),
        fields(db.operation = "SELECT")
    )]
    async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Option<User>, DomainError> {
        let found = UserEntity::find_by_id(id).one(conn).await.map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<User>, DomainError> {
        let rows = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(
        name = "friends_directory.repo.users.update",
        skip(self, conn, user),
        fields(db.operation = "UPDATE", user.id = user.id)
    )]
    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user: &User,
    ) -> Result<(), DomainError> {
        let m = UserAM {
            id: Set(user.id),
            name: Set(user.name.clone()),
            surname: Set(user.surname.clone()),
            email: Set(user.email.clone()),
        };

        match m.update(conn).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(DomainError::user_not_found(user.id)),
            Err(e) => Err(write_err(e, &user.email)),
        }
    }

    #[instrument(
        name = "friends_directory.repo.users.delete",
        skip(self, conn),
        fields(db.operation = "DELETE")
    )]
    async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<u64, DomainError> {
        let result = UserEntity::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| match violation(&e) {
                // friendships reference users with ON DELETE RESTRICT
                Some(Violation::ForeignKey) => DomainError::user_has_friendships(id),
                _ => db_err(e),
            })?;
        Ok(result.rows_affected)
    }

    async fn exists<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<bool, DomainError> {
        if id < 0 {
            return Err(DomainError::invalid_id(id));
        }
        let count = UserEntity::find()
            .filter(Column::Id.eq(id))
            .count(conn)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn email_exists<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
    ) -> Result<bool, DomainError> {
        let count = UserEntity::find()
            .filter(Column::Email.eq(email))
            .count(conn)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }
}
