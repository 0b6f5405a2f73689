//! Migration: Create the media_file table.
//!
//! Media files carry a segment identifier and a uuid string; the primary key
//! is database-generated.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE media_file (
                    id BIGSERIAL PRIMARY KEY,
                    segment VARCHAR(255),
                    uuid VARCHAR(255)
                );

                -- Index for lookups by uuid string
                CREATE INDEX idx_media_file_uuid ON media_file(uuid);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS media_file;")
            .await?;

        Ok(())
    }
}
