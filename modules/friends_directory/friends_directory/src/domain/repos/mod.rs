mod friendships_repo;
mod users_repo;

pub use friendships_repo::FriendshipsRepository;
pub use users_repo::UsersRepository;
