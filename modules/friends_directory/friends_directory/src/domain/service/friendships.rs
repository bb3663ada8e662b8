use friends_directory_sdk::{Friendship, User};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, instrument};

use super::Service;
use crate::domain::error::DomainError;
use crate::domain::repos::{FriendshipsRepository, UsersRepository};

/// Current time at the precision the store keeps (Postgres `TIMESTAMPTZ`
/// holds microseconds), so the returned edge matches the persisted one.
fn now_micros() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now - Duration::nanoseconds(i64::from(now.nanosecond() % 1_000))
}

impl<UR, FR> Service<UR, FR>
where
    UR: UsersRepository,
    FR: FriendshipsRepository,
{
    /// Create the directed edge `requester_id -> accepter_id`.
    #[instrument(skip(self))]
    pub async fn add_friend(
        &self,
        requester_id: i64,
        accepter_id: i64,
    ) -> Result<Friendship, DomainError> {
        info!("Adding friend");

        self.ensure_endpoints(requester_id, accepter_id).await?;

        let edge = Friendship {
            requester_id,
            accepter_id,
            created_at: now_micros(),
        };
        self.friendships.add(&self.db, &edge).await?;

        info!("Added friend");
        Ok(edge)
    }

    #[instrument(skip(self))]
    pub async fn remove_friend(
        &self,
        requester_id: i64,
        accepter_id: i64,
    ) -> Result<(), DomainError> {
        info!("Removing friend");

        self.ensure_endpoints(requester_id, accepter_id).await?;
        self.friendships
            .remove(&self.db, requester_id, accepter_id)
            .await?;

        info!("Removed friend");
        Ok(())
    }

    /// Accepters of the edges requested by `requester_id`, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_friends(&self, requester_id: i64) -> Result<Vec<User>, DomainError> {
        if !self.users.exists(&self.db, requester_id).await? {
            return Err(DomainError::user_not_found(requester_id));
        }

        let friends = self
            .friendships
            .list_accepted_by(&self.db, requester_id)
            .await?;
        debug!(count = friends.len(), "Listed friends");
        Ok(friends)
    }

    async fn ensure_endpoints(
        &self,
        requester_id: i64,
        accepter_id: i64,
    ) -> Result<(), DomainError> {
        Self::validate_id(requester_id)?;
        Self::validate_id(accepter_id)?;
        if requester_id == accepter_id {
            return Err(DomainError::self_friendship(requester_id));
        }

        for id in [requester_id, accepter_id] {
            if !self.users.exists(&self.db, id).await? {
                return Err(DomainError::user_not_found(id));
            }
        }
        Ok(())
    }
}
