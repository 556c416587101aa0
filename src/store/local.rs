//! Whole-document JSON store.
//!
//! The entire data set lives in memory and is written back to a single file
//! after each mutation. A failed write leaves the in-memory copy untouched.
//! File access goes through `tokio::fs` so the executor is never blocked.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::RecordStore;
use crate::error::{AppError, AppResult};
use crate::models::{Collection, Fields, Record, RecordId};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LocalData {
    #[serde(default = "first_id")]
    next_id: RecordId,
    #[serde(default)]
    collections: BTreeMap<String, Vec<Record>>,
}

fn first_id() -> RecordId {
    1
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            collections: BTreeMap::new(),
        }
    }
}

impl LocalData {
    fn record_mut(&mut self, collection: Collection, id: RecordId) -> AppResult<&mut Record> {
        self.collections
            .get_mut(collection.name())
            .and_then(|records| records.iter_mut().find(|r| r.id == id))
            .ok_or_else(|| AppError::not_found(format!("{}/{}", collection, id)))
    }
}

#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    data: Mutex<LocalData>,
}

impl LocalStore {
    /// Loads `path`, or starts empty when the file does not exist yet.
    pub async fn open(path: &Path) -> AppResult<Self> {
        let data = match tokio::fs::read_to_string(path).await {
            Ok(raw) if raw.trim().is_empty() => LocalData::default(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No local store at {}, starting empty", path.display());
                LocalData::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            data: Mutex::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, data: &LocalData) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(data)?;
        tokio::fs::write(&self.path, json).await?;
        debug!("Persisted local store to {}", self.path.display());
        Ok(())
    }

    /// Applies `change` to a copy of the data and swaps it in once written.
    async fn mutate<T>(&self, change: impl FnOnce(&mut LocalData) -> AppResult<T> + Send) -> AppResult<T>
    where
        T: Send,
    {
        let mut guard = self.data.lock().await;
        let mut next = guard.clone();
        let out = change(&mut next)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(out)
    }
}

impl RecordStore for LocalStore {
    async fn list_all(&self, collection: Collection) -> AppResult<Vec<Record>> {
        let guard = self.data.lock().await;
        Ok(guard.collections.get(collection.name()).cloned().unwrap_or_default())
    }

    async fn add(&self, collection: Collection, fields: Fields, owner: Option<String>) -> AppResult<RecordId> {
        self.mutate(|data| {
            let id = data.next_id;
            data.next_id += 1;
            data.collections
                .entry(collection.name().to_string())
                .or_default()
                .push(Record::new(id, owner, fields));
            Ok(id)
        })
        .await
    }

    async fn update_field(&self, collection: Collection, id: RecordId, field: &str, value: &str) -> AppResult<()> {
        self.mutate(|data| {
            let record = data.record_mut(collection, id)?;
            record.fields.insert(field.to_string(), value.to_string());
            Ok(())
        })
        .await
    }

    async fn remove(&self, collection: Collection, id: RecordId) -> AppResult<()> {
        self.mutate(|data| {
            let records = data.collections.entry(collection.name().to_string()).or_default();
            let before = records.len();
            records.retain(|r| r.id != id);
            if records.len() == before {
                return Err(AppError::not_found(format!("{}/{}", collection, id)));
            }
            Ok(())
        })
        .await
    }
}
