//! SeaORM-backed implementation of the media file store.

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DatabaseBackend, EntityTrait, Order,
    PaginatorTrait, QueryOrder, QuerySelect, Set, Statement,
};

use crate::entity::media_file::{self, ActiveModel, Entity as MediaFileEntity, Model};
use crate::error::{AppError, AppResult};
use crate::models::{MediaFile, PageParams, SortDirection, SortField};

use super::{DbPool, MediaFileStore};

fn to_domain(model: Model) -> MediaFile {
    MediaFile {
        id: Some(model.id),
        segment: model.segment,
        uuid: model.uuid,
    }
}

fn sort_column(field: SortField) -> media_file::Column {
    match field {
        SortField::Id => media_file::Column::Id,
        SortField::Segment => media_file::Column::Segment,
        SortField::Uuid => media_file::Column::Uuid,
    }
}

#[async_trait::async_trait]
impl MediaFileStore for DbPool {
    async fn create(&self, file: MediaFile) -> AppResult<MediaFile> {
        if file.id.is_some() {
            return Err(AppError::IdConflict);
        }

        let model = ActiveModel {
            id: NotSet,
            segment: Set(file.segment),
            uuid: Set(file.uuid),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert media file: {}", e)))?;

        Ok(to_domain(result))
    }

    async fn save(&self, file: MediaFile) -> AppResult<MediaFile> {
        let Some(id) = file.id else {
            return self.create(file).await;
        };

        let existing = MediaFileEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get media file: {}", e)))?;

        let result = match existing {
            Some(row) => {
                let mut active: ActiveModel = row.into();
                active.segment = Set(file.segment);
                active.uuid = Set(file.uuid);
                active
                    .update(self.connection())
                    .await
                    .map_err(|e| AppError::Database(format!("Failed to update media file: {}", e)))?
            }
            // Unmatched id: insert as a new row under the supplied id.
            None => {
                let active = ActiveModel {
                    id: Set(id),
                    segment: Set(file.segment),
                    uuid: Set(file.uuid),
                };
                let inserted = active
                    .insert(self.connection())
                    .await
                    .map_err(|e| {
                        AppError::Database(format!("Failed to insert media file: {}", e))
                    })?;

                // An explicit-id insert bypasses the BIGSERIAL sequence. Keep
                // the sequence ahead of the inserted id so later creates
                // cannot draw a duplicate key.
                let bump = Statement::from_string(
                    DatabaseBackend::Postgres,
                    "SELECT setval('media_file_id_seq', \
                     (SELECT GREATEST(MAX(id), 1) FROM media_file))"
                        .to_string(),
                );
                self.connection().execute(bump).await.map_err(|e| {
                    AppError::Database(format!("Failed to advance media file id sequence: {}", e))
                })?;

                inserted
            }
        };

        Ok(to_domain(result))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<MediaFile>> {
        let result = MediaFileEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get media file: {}", e)))?;

        Ok(result.map(to_domain))
    }

    async fn find_page(&self, params: &PageParams) -> AppResult<(Vec<MediaFile>, u64)> {
        let (field, direction) = params.sort()?;
        let order = match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        let select = MediaFileEntity::find();

        // Count total before pagination
        let total = select
            .clone()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count media files: {}", e)))?;

        let files = select
            .order_by(sort_column(field), order)
            .offset(params.offset())
            .limit(params.clamped_size())
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list media files: {}", e)))?;

        Ok((files.into_iter().map(to_domain).collect(), total))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        // Idempotent: zero rows affected is still success.
        MediaFileEntity::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete media file: {}", e)))?;

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        let total = MediaFileEntity::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count media files: {}", e)))?;

        Ok(total)
    }
}
