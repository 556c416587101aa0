// file: src/models/meeting.rs
use super::record::{Fields, Record, RecordId};

/// A meeting as the calendar and the meetings table see it.
///
/// `date` is `YYYY-MM-DD` text or empty; the calendar matches it by string
/// equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub id: Option<RecordId>,
    pub date: String,
    pub agenda: String,
    pub decisions: String,
    pub zoom: String,
    pub owner: Option<String>,
}

impl Meeting {
    pub fn has_zoom(&self) -> bool {
        !self.zoom.trim().is_empty()
    }

    /// The stored field set. Always carries the full meeting schema.
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("date".to_string(), self.date.clone());
        fields.insert("agenda".to_string(), self.agenda.clone());
        fields.insert("decisions".to_string(), self.decisions.clone());
        fields.insert("zoom".to_string(), self.zoom.clone());
        fields
    }
}

impl From<&Record> for Meeting {
    fn from(record: &Record) -> Self {
        Self {
            id: Some(record.id),
            date: record.get("date").to_string(),
            agenda: record.get("agenda").to_string(),
            decisions: record.get("decisions").to_string(),
            zoom: record.get("zoom").to_string(),
            owner: record.owner.clone(),
        }
    }
}

/// A joinable link found on a meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingLink {
    pub platform: String,
    pub url: String,
}

impl MeetingLink {
    pub fn new(platform: String, url: String) -> Self {
        Self { platform, url }
    }
}
