// file: src/models/record.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type RecordId = i64;

/// Field name to value. Every value is kept as text, the way the list
/// inputs produce it.
pub type Fields = BTreeMap<String, String>;

/// One row of a named collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub fields: Fields,
}

impl Record {
    pub fn new(id: RecordId, owner: Option<String>, fields: Fields) -> Self {
        Self { id, owner, fields }
    }

    /// Value of `field`, or the empty string when the record never had it.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner.as_deref() == Some(user_id)
    }
}
