//! Read-only list of meetings that have a join link.

use crate::models::{Meeting, MeetingLink};
use crate::utils::meeting_link;

pub const NO_ZOOM_LINKS: &str = "No Zoom links found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomEntry {
    pub date: String,
    pub agenda: String,
    pub decisions: String,
    pub link: MeetingLink,
}

impl ZoomEntry {
    pub fn join_label(&self) -> String {
        format!("Join {}", self.link.platform)
    }
}

/// A snapshot of the meetings with links, taken once at load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomListing {
    entries: Vec<ZoomEntry>,
}

impl ZoomListing {
    pub fn from_meetings(meetings: &[Meeting]) -> Self {
        let entries = meetings
            .iter()
            .filter(|m| m.has_zoom())
            .filter_map(|m| {
                meeting_link(&m.zoom).map(|link| ZoomEntry {
                    date: m.date.clone(),
                    agenda: m.agenda.clone(),
                    decisions: m.decisions.clone(),
                    link,
                })
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ZoomEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting(date: &str, zoom: &str) -> Meeting {
        Meeting {
            id: None,
            date: date.to_string(),
            agenda: format!("agenda {}", date),
            decisions: String::new(),
            zoom: zoom.to_string(),
            owner: None,
        }
    }

    #[test]
    fn test_only_meetings_with_links_are_listed() {
        let meetings = vec![
            meeting("2024-03-01", "https://zoom.us/j/1"),
            meeting("2024-03-02", ""),
            meeting("2024-03-03", "  "),
            meeting("2024-03-04", "https://meet.google.com/abc-defg-hij"),
        ];
        let listing = ZoomListing::from_meetings(&meetings);

        let dates: Vec<_> = listing.entries().iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-03-04"]);
        assert_eq!(listing.entries()[0].join_label(), "Join Zoom");
        assert_eq!(listing.entries()[1].join_label(), "Join Google Meet");
    }

    #[test]
    fn test_empty_listing() {
        let listing = ZoomListing::from_meetings(&[meeting("2024-03-02", "")]);
        assert!(listing.is_empty());
    }
}
