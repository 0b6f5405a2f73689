//! Database module providing connection management and the record store.

pub mod media_files;
pub mod memory;

use sea_orm::{Database, DatabaseConnection};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{MediaFile, PageParams};

pub use memory::InMemoryStore;

/// Record store abstraction over media file persistence.
///
/// Handlers depend on this trait rather than a concrete backend so the HTTP
/// layer can be exercised against [`InMemoryStore`] in tests and run against
/// [`DbPool`] in production.
#[async_trait::async_trait]
pub trait MediaFileStore: Send + Sync {
    /// Insert a new record. Fails with [`AppError::IdConflict`] if the record
    /// already carries an id; the store assigns ids.
    async fn create(&self, file: MediaFile) -> AppResult<MediaFile>;

    /// Upsert a record. An id matching an existing row replaces that row's
    /// `segment`/`uuid`; an id with no matching row inserts a new row under
    /// that id; a record without an id falls back to create semantics.
    async fn save(&self, file: MediaFile) -> AppResult<MediaFile>;

    /// Look up a record by id. A missing id is `None`, never an error.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<MediaFile>>;

    /// Return one page of records plus the total record count, honoring the
    /// caller-supplied page index, size, and sort.
    async fn find_page(&self, params: &PageParams) -> AppResult<(Vec<MediaFile>, u64)>;

    /// Delete a record by id. Deleting an absent id is a no-op that still
    /// reports success.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Total number of records.
    async fn count(&self) -> AppResult<u64>;
}

/// Database connection wrapper.
///
/// SeaORM's `DatabaseConnection` is itself a pool and is cheap to clone.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect to the database from configuration.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let conn = Database::connect(&config.database_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        Ok(DbPool { conn })
    }

    /// Get access to the connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
