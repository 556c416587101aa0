// Declare modules
pub mod meeting;
pub mod record;
pub mod schema;

// Re-export so callers can write `use crate::models::Meeting`.
pub use meeting::{Meeting, MeetingLink};
pub use record::{Fields, Record, RecordId};
pub use schema::{is_iso_date, Collection, FieldKind, FieldSpec};
