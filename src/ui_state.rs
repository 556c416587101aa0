//! UI state management module
//!
//! State that only matters to the presentation layer: which page is shown
//! and transient feedback. Data and calendar state live on the app itself.

/// The pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Family,
    Meetings,
    Calendar,
    Michango,
    ZoomLinks,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Family,
        View::Meetings,
        View::Calendar,
        View::Michango,
        View::ZoomLinks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Family => "Family",
            View::Meetings => "Meetings",
            View::Calendar => "Calendar",
            View::Michango => "Michango",
            View::ZoomLinks => "Zoom Links",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub current_view: View,

    /// Whether the copy button currently reads "Copied!".
    pub copied: bool,

    /// Store status shown in the sidebar.
    pub status: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            current_view: View::Calendar,
            copied: false,
            status: "Opening store...".to_string(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
