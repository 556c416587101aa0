use crate::calendar::DraftField;
use crate::models::{Collection, Record, RecordId};
use crate::ui_state::View;

/// Which table mutation a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Add,
    Update,
    Remove,
}

impl TableAction {
    /// Banner text for a failed mutation, e.g. "Failed to add family member".
    pub fn failure(&self, collection: Collection) -> String {
        let verb = match self {
            TableAction::Add => "add",
            TableAction::Update => "update",
            TableAction::Remove => "remove",
        };
        format!("Failed to {} {}", verb, collection.noun())
    }
}

/// Unified application message type
///
/// Store results travel as `Result<_, String>` so messages stay `Clone`.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Navigation =====
    ShowView(View),

    // ===== Startup =====
    DataLoaded(Vec<(Collection, Result<Vec<Record>, String>)>),

    // ===== Calendar =====
    CalendarNavigate(i32),
    CalendarSelectDate(String),
    CalendarCloseModal,
    CalendarDraftChanged(DraftField, String),
    CalendarSubmit,
    MeetingSaved(Result<Vec<Record>, String>),

    // ===== Tables =====
    AddRow(Collection),
    EditField {
        collection: Collection,
        id: RecordId,
        field: &'static str,
        value: String,
    },
    CommitField {
        collection: Collection,
        id: RecordId,
        field: &'static str,
    },
    RemoveRow(Collection, RecordId),
    TableChanged {
        collection: Collection,
        action: TableAction,
        result: Result<Vec<Record>, String>,
    },
    Reloaded(Collection, Result<Vec<Record>, String>),

    // ===== Shell =====
    DismissNotification(u64),
    CopyUserId,
    CopyFeedbackExpired,
    JoinMeeting(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_descriptions() {
        assert_eq!(TableAction::Add.failure(Collection::Family), "Failed to add family member");
        assert_eq!(TableAction::Remove.failure(Collection::Meetings), "Failed to remove meeting");
        assert_eq!(TableAction::Update.failure(Collection::Michango), "Failed to update michango");
    }
}
