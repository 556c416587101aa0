//! Transient error banner.
//!
//! Showing a message returns a token; the caller schedules a dismissal for
//! that token after [`NOTIFICATION_TIMEOUT`](crate::config::NOTIFICATION_TIMEOUT).
//! A stale timer never hides a newer message.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `"<description>: <error>"` and returns its dismissal token.
    pub fn show(&mut self, description: &str, error: &str) -> u64 {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            message: format!("{}: {}", description, error),
        });
        self.next_id
    }

    /// Hides the banner if it is still the one `id` was issued for.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(current) if current.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
