// file: src/models/schema.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::Fields;

const ISO_DATE: &str = "%Y-%m-%d";

/// True for a real calendar date written exactly as `YYYY-MM-DD`.
pub fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, ISO_DATE)
        .map(|date| date.format(ISO_DATE).to_string() == value)
        .unwrap_or(false)
}

/// The kind of input control a field is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Phone,
    Date,
    Url,
    Amount,
}

impl FieldKind {
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::LongText => "",
            FieldKind::Phone => "+255...",
            FieldKind::Date => "YYYY-MM-DD",
            FieldKind::Url => "https://zoom.us/...",
            FieldKind::Amount => "0",
        }
    }

    /// Whether `value` may be stored in a field of this kind.
    ///
    /// Dates are empty or `YYYY-MM-DD`; every other kind takes free text.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FieldKind::Date => value.is_empty() || is_iso_date(value),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, label, kind }
}

const FAMILY_FIELDS: &[FieldSpec] = &[
    field("name", "Name", FieldKind::Text),
    field("phone", "Phone", FieldKind::Phone),
];

const MEETING_FIELDS: &[FieldSpec] = &[
    field("date", "Date", FieldKind::Date),
    field("agenda", "Agenda", FieldKind::Text),
    field("decisions", "Decisions", FieldKind::LongText),
    field("zoom", "Zoom", FieldKind::Url),
];

const MICHANGO_FIELDS: &[FieldSpec] = &[
    field("date", "Date", FieldKind::Date),
    field("name", "Name", FieldKind::Text),
    field("amount", "Amount", FieldKind::Amount),
    field("purpose", "Purpose", FieldKind::Text),
];

/// The named collections the application keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Family,
    Meetings,
    Michango,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Family, Collection::Meetings, Collection::Michango];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Family => "family",
            Collection::Meetings => "meetings",
            Collection::Michango => "michango",
        }
    }

    /// Singular noun used in user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Collection::Family => "family member",
            Collection::Meetings => "meeting",
            Collection::Michango => "michango",
        }
    }

    pub fn schema(&self) -> &'static [FieldSpec] {
        match self {
            Collection::Family => FAMILY_FIELDS,
            Collection::Meetings => MEETING_FIELDS,
            Collection::Michango => MICHANGO_FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.schema().iter().find(|spec| spec.name == name)
    }

    /// Every schema field present and empty, for a freshly added row.
    pub fn blank_fields(&self) -> Fields {
        self.schema()
            .iter()
            .map(|spec| (spec.name.to_string(), String::new()))
            .collect()
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
