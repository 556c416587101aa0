//! Record persistence.
//!
//! Every collection is a list of id-addressed [`Record`]s. Two backends
//! implement the same contract: a SQLite database and a single JSON file
//! that is rewritten after every change.

use std::future::Future;

use anyhow::{Context, Result};
use log::info;

use crate::config::{AppConfig, StoreKind};
use crate::error::AppResult;
use crate::models::{Collection, Fields, Record, RecordId};

pub mod database;
pub mod local;

pub use database::Database;
pub use local::LocalStore;

/// The four operations every list in the application is built on.
pub trait RecordStore: Send + Sync {
    /// All records of `collection` in insertion order.
    fn list_all(&self, collection: Collection) -> impl Future<Output = AppResult<Vec<Record>>> + Send;

    /// Creates one record and returns the id the store assigned to it.
    fn add(
        &self,
        collection: Collection,
        fields: Fields,
        owner: Option<String>,
    ) -> impl Future<Output = AppResult<RecordId>> + Send;

    /// Overwrites exactly one field of one record.
    fn update_field(
        &self,
        collection: Collection,
        id: RecordId,
        field: &str,
        value: &str,
    ) -> impl Future<Output = AppResult<()>> + Send;

    fn remove(&self, collection: Collection, id: RecordId) -> impl Future<Output = AppResult<()>> + Send;
}

/// The store selected by configuration.
#[derive(Debug)]
pub enum Backend {
    Sqlite(Database),
    Local(LocalStore),
}

impl Backend {
    pub fn label(&self) -> &'static str {
        match self {
            Backend::Sqlite(_) => "SQLite store",
            Backend::Local(_) => "Local file store",
        }
    }

    pub async fn open(config: &AppConfig) -> Result<Self> {
        match config.store {
            StoreKind::Sqlite => {
                info!("Using SQLite store at {}", config.db_path.display());
                let db = Database::new(&config.db_path)
                    .await
                    .context("Failed to open SQLite store")?;
                Ok(Backend::Sqlite(db))
            }
            StoreKind::Local => {
                info!("Using local JSON store at {}", config.local_path.display());
                let store = LocalStore::open(&config.local_path)
                    .await
                    .context("Failed to open local store")?;
                Ok(Backend::Local(store))
            }
        }
    }
}

impl RecordStore for Backend {
    async fn list_all(&self, collection: Collection) -> AppResult<Vec<Record>> {
        match self {
            Backend::Sqlite(db) => db.list_all(collection).await,
            Backend::Local(store) => store.list_all(collection).await,
        }
    }

    async fn add(&self, collection: Collection, fields: Fields, owner: Option<String>) -> AppResult<RecordId> {
        match self {
            Backend::Sqlite(db) => db.add(collection, fields, owner).await,
            Backend::Local(store) => store.add(collection, fields, owner).await,
        }
    }

    async fn update_field(&self, collection: Collection, id: RecordId, field: &str, value: &str) -> AppResult<()> {
        match self {
            Backend::Sqlite(db) => db.update_field(collection, id, field, value).await,
            Backend::Local(store) => store.update_field(collection, id, field, value).await,
        }
    }

    async fn remove(&self, collection: Collection, id: RecordId) -> AppResult<()> {
        match self {
            Backend::Sqlite(db) => db.remove(collection, id).await,
            Backend::Local(store) => store.remove(collection, id).await,
        }
    }
}
