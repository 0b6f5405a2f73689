//! In-memory media file store.
//!
//! Backs the HTTP integration tests and local development without a running
//! PostgreSQL instance. Semantics mirror the SeaORM implementation, including
//! id assignment, upsert-on-missing-id, and idempotent deletes.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::{MediaFile, PageParams, SortDirection, SortField};

use super::MediaFileStore;

struct Inner {
    rows: BTreeMap<i64, MediaFile>,
    next_id: i64,
}

/// Thread-safe in-memory record store.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl Default for Inner {
    fn default() -> Self {
        Inner {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &MediaFile, b: &MediaFile, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Segment => a.segment.cmp(&b.segment),
        SortField::Uuid => a.uuid.cmp(&b.uuid),
    }
}

#[async_trait::async_trait]
impl MediaFileStore for InMemoryStore {
    async fn create(&self, mut file: MediaFile) -> AppResult<MediaFile> {
        if file.id.is_some() {
            return Err(AppError::IdConflict);
        }

        let mut inner = self.inner.write().expect("Store lock poisoned");
        let id = inner.next_id;
        inner.next_id = inner.next_id.saturating_add(1);
        file.id = Some(id);
        inner.rows.insert(id, file.clone());

        Ok(file)
    }

    async fn save(&self, file: MediaFile) -> AppResult<MediaFile> {
        let Some(id) = file.id else {
            return self.create(file).await;
        };

        let mut inner = self.inner.write().expect("Store lock poisoned");
        // Upsert: replaces the row if present, inserts under the supplied id
        // otherwise. Keep generated ids ahead of caller-supplied ones;
        // saturate at the top of the id space rather than overflow, since a
        // panic here would poison the lock for every later request.
        inner.rows.insert(id, file.clone());
        if id >= inner.next_id {
            inner.next_id = id.saturating_add(1);
        }

        Ok(file)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<MediaFile>> {
        let inner = self.inner.read().expect("Store lock poisoned");
        Ok(inner.rows.get(&id).cloned())
    }

    async fn find_page(&self, params: &PageParams) -> AppResult<(Vec<MediaFile>, u64)> {
        let (field, direction) = params.sort()?;

        let inner = self.inner.read().expect("Store lock poisoned");
        let total = inner.rows.len() as u64;

        let mut files: Vec<MediaFile> = inner.rows.values().cloned().collect();
        files.sort_by(|a, b| {
            let ordering = compare(a, b, field);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let page: Vec<MediaFile> = files
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.clamped_size() as usize)
            .collect();

        Ok((page, total))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let mut inner = self.inner.write().expect("Store lock poisoned");
        inner.rows.remove(&id);
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        let inner = self.inner.read().expect("Store lock poisoned");
        Ok(inner.rows.len() as u64)
    }
}
