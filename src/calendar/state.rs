//! Calendar interaction state.
//!
//! Holds the month cursor, the per-date modal and the meeting list the grid
//! is drawn from. The modal listing is always read from `meetings`, never
//! cached, so a reload is reflected on the next render.

use chrono::NaiveDate;
use log::debug;

use super::{project, CalendarGrid, MonthCursor};
use crate::models::{is_iso_date, Meeting};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open { date: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Agenda,
    Decisions,
    Zoom,
}

/// The new-meeting form inside the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingDraft {
    pub date: String,
    pub agenda: String,
    pub decisions: String,
    pub zoom: String,
}

impl MeetingDraft {
    pub fn for_date(date: &str) -> Self {
        Self {
            date: date.to_string(),
            ..Self::default()
        }
    }

    /// A trimmed meeting, or `None` when agenda or decisions is blank or the
    /// date is not a real `YYYY-MM-DD` day.
    fn to_meeting(&self, fallback_date: &str, owner: Option<&str>) -> Option<Meeting> {
        let agenda = self.agenda.trim();
        let decisions = self.decisions.trim();
        if agenda.is_empty() || decisions.is_empty() {
            return None;
        }

        let date = match self.date.trim() {
            "" => fallback_date,
            date => date,
        };
        if !is_iso_date(date) {
            debug!("Rejected meeting draft with date {:?}", date);
            return None;
        }

        Some(Meeting {
            id: None,
            date: date.to_string(),
            agenda: agenda.to_string(),
            decisions: decisions.to_string(),
            zoom: self.zoom.trim().to_string(),
            owner: owner.map(str::to_string),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CalendarState {
    cursor: MonthCursor,
    modal: ModalState,
    draft: MeetingDraft,
    meetings: Vec<Meeting>,
}

impl CalendarState {
    pub fn new(cursor: MonthCursor) -> Self {
        Self {
            cursor,
            modal: ModalState::Closed,
            draft: MeetingDraft::default(),
            meetings: Vec::new(),
        }
    }

    pub fn starting_at(today: NaiveDate) -> Self {
        Self::new(MonthCursor::containing(today))
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn selected_date(&self) -> Option<&str> {
        match &self.modal {
            ModalState::Open { date } => Some(date.as_str()),
            ModalState::Closed => None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open { .. })
    }

    pub fn draft(&self) -> &MeetingDraft {
        &self.draft
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Replaces the meeting list with a fresh read from the store.
    pub fn set_meetings(&mut self, meetings: Vec<Meeting>) {
        self.meetings = meetings;
    }

    pub fn navigate(&mut self, delta: i32) {
        self.cursor = self.cursor.shift(delta);
        debug!("Calendar moved to {}-{:02}", self.cursor.year(), self.cursor.month() + 1);
    }

    /// Opens the modal on `date`, or switches it there when already open.
    pub fn select_date(&mut self, date: &str) {
        self.modal = ModalState::Open { date: date.to_string() };
        self.draft = MeetingDraft::for_date(date);
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn edit_draft(&mut self, field: DraftField, value: String) {
        if !self.is_modal_open() {
            return;
        }
        match field {
            DraftField::Date => self.draft.date = value,
            DraftField::Agenda => self.draft.agenda = value,
            DraftField::Decisions => self.draft.decisions = value,
            DraftField::Zoom => self.draft.zoom = value,
        }
    }

    /// Accepts the draft as a new meeting.
    ///
    /// Returns the meeting the caller must persist. Nothing changes and
    /// `None` is returned when the modal is closed, the draft is missing
    /// its agenda or decisions, or its date is not a real day. On success
    /// the meeting is appended and the modal re-opens on the meeting's date
    /// with an empty draft.
    pub fn submit(&mut self, owner: Option<&str>) -> Option<Meeting> {
        let selected = self.selected_date()?.to_string();
        let meeting = self.draft.to_meeting(&selected, owner)?;

        self.meetings.push(meeting.clone());
        self.select_date(&meeting.date);
        Some(meeting)
    }

    /// Meetings on the selected date, in list order.
    pub fn modal_meetings(&self) -> Vec<&Meeting> {
        match self.selected_date() {
            Some(date) => self.meetings.iter().filter(|m| m.date == date).collect(),
            None => Vec::new(),
        }
    }

    pub fn project(&self, today: NaiveDate) -> CalendarGrid {
        project(self.cursor, &self.meetings, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_2024() -> CalendarState {
        CalendarState::new(MonthCursor::new(2024, 2).unwrap())
    }

    fn fill(state: &mut CalendarState, agenda: &str, decisions: &str, zoom: &str) {
        state.edit_draft(DraftField::Agenda, agenda.to_string());
        state.edit_draft(DraftField::Decisions, decisions.to_string());
        state.edit_draft(DraftField::Zoom, zoom.to_string());
    }

    #[test]
    fn test_navigate_round_trip() {
        let mut state = march_2024();
        let start = state.cursor();
        state.navigate(1);
        state.navigate(-1);
        assert_eq!(state.cursor(), start);
    }

    #[test]
    fn test_navigate_from_december_wraps() {
        let mut state = CalendarState::new(MonthCursor::new(2024, 11).unwrap());
        state.navigate(1);
        assert_eq!(state.cursor().year(), 2025);
        assert_eq!(state.cursor().month(), 0);
    }

    #[test]
    fn test_navigate_keeps_modal_open() {
        let mut state = march_2024();
        state.select_date("2024-03-20");
        state.navigate(1);
        assert_eq!(state.selected_date(), Some("2024-03-20"));
    }

    #[test]
    fn test_select_date_resets_draft() {
        let mut state = march_2024();
        state.select_date("2024-03-20");
        fill(&mut state, "Budget", "Pending", "https://zoom.us/j/1");

        state.select_date("2024-03-21");
        assert_eq!(state.selected_date(), Some("2024-03-21"));
        assert_eq!(state.draft(), &MeetingDraft::for_date("2024-03-21"));
    }

    #[test]
    fn test_submit_with_empty_decisions_is_rejected() {
        let mut state = march_2024();
        state.select_date("2024-03-20");
        fill(&mut state, "Budget", "", "");

        assert!(state.submit(Some("u1")).is_none());
        assert!(state.meetings().is_empty());
        assert_eq!(state.draft().agenda, "Budget");
    }

    #[test]
    fn test_submit_whitespace_only_agenda_is_rejected() {
        let mut state = march_2024();
        state.select_date("2024-03-20");
        fill(&mut state, "   ", "Approved", "");
        assert!(state.submit(None).is_none());
    }

    #[test]
    fn test_submit_while_closed_is_ignored() {
        let mut state = march_2024();
        fill(&mut state, "Budget", "Approved", "");
        assert!(state.submit(None).is_none());
        assert!(state.meetings().is_empty());
    }

    #[test]
    fn test_submit_appends_and_marks_day() {
        let mut state = march_2024();
        state.select_date("2024-03-20");
        assert!(state.modal_meetings().is_empty());

        fill(&mut state, " Budget review ", "Approved $500", "");
        let meeting = state.submit(Some("u1")).unwrap();

        assert_eq!(meeting.date, "2024-03-20");
        assert_eq!(meeting.agenda, "Budget review");
        assert_eq!(meeting.zoom, "");
        assert_eq!(meeting.owner.as_deref(), Some("u1"));
        assert_eq!(state.meetings().len(), 1);

        // Still open on the same date, listing the new meeting, fresh draft.
        assert_eq!(state.selected_date(), Some("2024-03-20"));
        assert_eq!(state.modal_meetings().len(), 1);
        assert!(state.draft().agenda.is_empty());

        let grid = state.project(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(grid.cell_for_day(20).unwrap().has_meeting);
    }

    #[test]
    fn test_submit_to_edited_date_moves_modal() {
        let mut state = march_2024();
        state.select_date("2024-03-20");
        state.edit_draft(DraftField::Date, "2024-03-22".to_string());
        fill(&mut state, "Harambee", "Set target", "");

        state.submit(None).unwrap();
        assert_eq!(state.selected_date(), Some("2024-03-22"));
        assert_eq!(state.modal_meetings().len(), 1);
    }

    #[test]
    fn test_submit_with_impossible_date_is_rejected() {
        let mut state = march_2024();
        state.select_date("2024-03-20");
        state.edit_draft(DraftField::Date, "2024-02-30".to_string());
        fill(&mut state, "Budget", "Approved", "");

        assert!(state.submit(Some("u1")).is_none());
        assert!(state.meetings().is_empty());
        assert_eq!(state.selected_date(), Some("2024-03-20"));

        state.edit_draft(DraftField::Date, "next friday".to_string());
        assert!(state.submit(Some("u1")).is_none());
        assert!(state.meetings().is_empty());
    }

    #[test]
    fn test_submit_with_cleared_date_uses_selected_day() {
        let mut state = march_2024();
        state.select_date("2024-03-20");
        state.edit_draft(DraftField::Date, "  ".to_string());
        fill(&mut state, "Budget", "Approved", "");

        assert_eq!(state.submit(None).unwrap().date, "2024-03-20");
    }

    #[test]
    fn test_modal_listing_preserves_order() {
        let mut state = march_2024();
        state.select_date("2024-03-05");
        fill(&mut state, "First", "One", "");
        state.submit(None).unwrap();
        fill(&mut state, "Second", "Two", "");
        state.submit(None).unwrap();

        let agendas: Vec<_> = state.modal_meetings().iter().map(|m| m.agenda.as_str()).collect();
        assert_eq!(agendas, vec!["First", "Second"]);
    }

    #[test]
    fn test_close_modal_keeps_data() {
        let mut state = march_2024();
        state.select_date("2024-03-05");
        fill(&mut state, "First", "One", "");
        state.submit(None).unwrap();

        state.close_modal();
        assert!(!state.is_modal_open());
        assert!(state.modal_meetings().is_empty());
        assert_eq!(state.meetings().len(), 1);
    }
}
