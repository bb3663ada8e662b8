use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let sql = match backend {
            sea_orm::DatabaseBackend::Postgres => {
                r"
-- Directed edge: requester_id befriended accepter_id
CREATE TABLE IF NOT EXISTS friendships (
    requester_id BIGINT NOT NULL,
    accepter_id BIGINT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    PRIMARY KEY (requester_id, accepter_id),
    CONSTRAINT fk_friendships_requester FOREIGN KEY (requester_id) REFERENCES users(id) ON DELETE RESTRICT,
    CONSTRAINT fk_friendships_accepter FOREIGN KEY (accepter_id) REFERENCES users(id) ON DELETE RESTRICT,
    CONSTRAINT ck_friendships_not_self CHECK (requester_id <> accepter_id)
);

CREATE INDEX IF NOT EXISTS idx_friendships_accepter ON friendships(accepter_id);
                "
            }
            sea_orm::DatabaseBackend::MySql => {
                r"
-- Directed edge: requester_id befriended accepter_id
CREATE TABLE IF NOT EXISTS friendships (
    requester_id BIGINT NOT NULL,
    accepter_id BIGINT NOT NULL,
    created_at TIMESTAMP NOT NULL,
    PRIMARY KEY (requester_id, accepter_id),
    INDEX idx_friendships_accepter (accepter_id),
    CONSTRAINT fk_friendships_requester FOREIGN KEY (requester_id) REFERENCES users(id) ON DELETE RESTRICT,
    CONSTRAINT fk_friendships_accepter FOREIGN KEY (accepter_id) REFERENCES users(id) ON DELETE RESTRICT
);
                "
            }
            sea_orm::DatabaseBackend::Sqlite => {
                r"
-- Directed edge: requester_id befriended accepter_id
CREATE TABLE IF NOT EXISTS friendships (
    requester_id INTEGER NOT NULL,
    accepter_id INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    PRIMARY KEY (requester_id, accepter_id),
    FOREIGN KEY (requester_id) REFERENCES users(id) ON DELETE RESTRICT,
    FOREIGN KEY (accepter_id) REFERENCES users(id) ON DELETE RESTRICT,
    CHECK (requester_id <> accepter_id)
);

CREATE INDEX IF NOT EXISTS idx_friendships_accepter ON friendships(accepter_id);
                "
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared("DROP TABLE IF EXISTS friendships;")
            .await?;
        Ok(())
    }
}
