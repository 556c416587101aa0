//! Generic record table.
//!
//! Family, meetings and michango are the same thing: a collection, a field
//! schema and a list of rows that only their creator may change. Every
//! mutation goes to the store and is followed by a full reload, so the rows
//! shown are always what the store holds.

use std::collections::BTreeMap;

use log::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{Collection, FieldSpec, Fields, Record, RecordId};
use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct RecordTable {
    collection: Collection,
    rows: Vec<Record>,
    // Typed but not yet committed values, keyed by row and field.
    edits: BTreeMap<(RecordId, &'static str), String>,
}

impl RecordTable {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            rows: Vec::new(),
            edits: BTreeMap::new(),
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn schema(&self) -> &'static [FieldSpec] {
        self.collection.schema()
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn row(&self, id: RecordId) -> Option<&Record> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Installs a fresh read. Pending edits for rows that vanished are dropped.
    pub fn set_rows(&mut self, rows: Vec<Record>) {
        self.edits.retain(|(id, _), _| rows.iter().any(|r| r.id == *id));
        self.rows = rows;
    }

    pub fn can_edit(record: &Record, user_id: &str) -> bool {
        record.is_owned_by(user_id)
    }

    /// Fails unless `id` is a known row owned by `user_id`.
    pub fn check_editable(&self, id: RecordId, user_id: &str) -> AppResult<()> {
        let record = self
            .row(id)
            .ok_or_else(|| AppError::not_found(format!("{}/{}", self.collection, id)))?;
        if !Self::can_edit(record, user_id) {
            warn!("User {} tried to change {}/{} owned by someone else", user_id, self.collection, id);
            return Err(AppError::permission_denied(format!(
                "only the creator can change this {}",
                self.collection.noun()
            )));
        }
        Ok(())
    }

    /// Records typing into a cell without saving it.
    pub fn edit(&mut self, id: RecordId, field: &'static str, value: String) {
        self.edits.insert((id, field), value);
    }

    /// The value a cell should display: the pending edit, else the stored one.
    pub fn value_of<'a>(&'a self, record: &'a Record, field: &'static str) -> &'a str {
        self.edits
            .get(&(record.id, field))
            .map(String::as_str)
            .unwrap_or_else(|| record.get(field))
    }

    /// Removes and returns the pending value for a cell about to be saved.
    pub fn take_edit(&mut self, id: RecordId, field: &'static str) -> Option<String> {
        self.edits.remove(&(id, field))
    }
}

/// Checks that `field` belongs to the collection and can hold `value`.
pub fn validate_field(collection: Collection, field: &str, value: &str) -> AppResult<&'static FieldSpec> {
    let spec = collection
        .field(field)
        .ok_or_else(|| AppError::invalid_input(format!("{} has no field '{}'", collection, field)))?;
    if !spec.kind.accepts(value) {
        return Err(AppError::invalid_input(format!(
            "'{}' is not a valid {} (expected {})",
            value,
            spec.label.to_lowercase(),
            spec.kind.placeholder()
        )));
    }
    Ok(spec)
}

pub async fn load<S: RecordStore>(store: &S, collection: Collection) -> AppResult<Vec<Record>> {
    let rows = store.list_all(collection).await?;
    info!("Loaded {} {} records", rows.len(), collection);
    Ok(rows)
}

/// Adds a row with the given fields and returns the reloaded collection.
///
/// Fields missing from `fields` are filled in empty so every stored record
/// carries the whole schema.
pub async fn add_row<S: RecordStore>(
    store: &S,
    collection: Collection,
    fields: Fields,
    owner: Option<String>,
) -> AppResult<Vec<Record>> {
    let mut complete = collection.blank_fields();
    complete.extend(fields);
    for (field, value) in &complete {
        validate_field(collection, field, value)?;
    }

    let id = store.add(collection, complete, owner).await?;
    info!("Added {}/{}", collection, id);
    load(store, collection).await
}

pub async fn add_blank_row<S: RecordStore>(
    store: &S,
    collection: Collection,
    owner: Option<String>,
) -> AppResult<Vec<Record>> {
    add_row(store, collection, Fields::new(), owner).await
}

pub async fn update_row<S: RecordStore>(
    store: &S,
    collection: Collection,
    id: RecordId,
    field: &str,
    value: &str,
) -> AppResult<Vec<Record>> {
    validate_field(collection, field, value)?;
    store.update_field(collection, id, field, value).await?;
    info!("Updated {}/{} field {}", collection, id, field);
    load(store, collection).await
}

pub async fn remove_row<S: RecordStore>(store: &S, collection: Collection, id: RecordId) -> AppResult<Vec<Record>> {
    store.remove(collection, id).await?;
    info!("Removed {}/{}", collection, id);
    load(store, collection).await
}
