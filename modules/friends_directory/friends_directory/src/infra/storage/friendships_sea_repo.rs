use async_trait::async_trait;
use friends_directory_sdk::{Friendship, User};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::repos::FriendshipsRepository;
use crate::infra::storage::db::{Violation, db_err, violation};
use crate::infra::storage::entity::friendship::{
    ActiveModel as FriendshipAM, Column as FriendshipColumn, Entity as FriendshipEntity,
    Relation as FriendshipRelation,
};
use crate::infra::storage::entity::user::{Column as UserColumn, Entity as UserEntity};

/// ORM-based implementation of the `FriendshipsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmFriendshipsRepository;

impl OrmFriendshipsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn incident(user_id: i64) -> Condition {
    Condition::any()
        .add(FriendshipColumn::RequesterId.eq(user_id))
        .add(FriendshipColumn::AccepterId.eq(user_id))
}

#[async_trait]
impl FriendshipsRepository for OrmFriendshipsRepository {
    #[instrument(
        name = "friends_directory.repo.friendships.add",
        skip(self, conn, edge),
        fields(
            db.operation = "INSERT",
            requester_id = edge.requester_id,
            accepter_id = edge.accepter_id
        )
    )]
    async fn add<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        edge: &Friendship,
    ) -> Result<(), DomainError> {
        let m = FriendshipAM {
            requester_id: Set(edge.requester_id),
            accepter_id: Set(edge.accepter_id),
            created_at: Set(edge.created_at),
        };

        FriendshipEntity::insert(m)
            .exec_without_returning(conn)
            .await
            .map_err(|e| match violation(&e) {
                Some(Violation::Unique) => {
                    DomainError::friendship_already_exists(edge.requester_id, edge.accepter_id)
                }
                Some(Violation::ForeignKey) => {
                    DomainError::missing_endpoint(edge.requester_id, edge.accepter_id)
                }
                None => db_err(e),
            })?;

        Ok(())
    }

    #[instrument(
        name = "friends_directory.repo.friendships.remove",
        skip(self, conn),
        fields(db.operation = "DELETE")
    )]
    async fn remove<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        requester_id: i64,
        accepter_id: i64,
    ) -> Result<(), DomainError> {
        let result = FriendshipEntity::delete_many()
            .filter(FriendshipColumn::RequesterId.eq(requester_id))
            .filter(FriendshipColumn::AccepterId.eq(accepter_id))
            .exec(conn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::friendship_not_found(requester_id, accepter_id));
        }
        Ok(())
    }

    async fn list_accepted_by<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        requester_id: i64,
    ) -> Result<Vec<User>, DomainError> {
        // users.id = friendships.accepter_id
        let rows = UserEntity::find()
            .join(
                JoinType::InnerJoin,
                FriendshipRelation::Accepter.def().rev(),
            )
            .filter(FriendshipColumn::RequesterId.eq(requester_id))
            .order_by_asc(UserColumn::Id)
            .all(conn)
            .await
            .map_err(db_err)?;

        debug!(requester_id, count = rows.len(), "Loaded accepted friends");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_incident<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<u64, DomainError> {
        FriendshipEntity::find()
            .filter(incident(user_id))
            .count(conn)
            .await
            .map_err(db_err)
    }

    async fn remove_incident<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<u64, DomainError> {
        let result = FriendshipEntity::delete_many()
            .filter(incident(user_id))
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}
