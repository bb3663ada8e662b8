use friends_directory_sdk::User;

use crate::infra::storage::entity::Model as UserEntity;

/// Convert a database entity to a contract model (owned version)
impl From<UserEntity> for User {
    fn from(e: UserEntity) -> Self {
        Self {
            id: e.id,
            name: e.name,
            surname: e.surname,
            email: e.email,
        }
    }
}
