// Jamii Library
// Exposes core functionality for testing and reuse

pub mod app;
pub mod calendar;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod notification;
pub mod store;
pub mod table;
pub mod ui;
pub mod ui_state;
pub mod utils;
pub mod zoom;

// Re-export commonly used types
pub use models::*;
pub use calendar::{CalendarGrid, CalendarState, MonthCursor};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use store::{Backend, Database, LocalStore, RecordStore};
