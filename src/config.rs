//! Application configuration
//!
//! Everything is read from environment variables with per-user defaults
//! under the platform data directory.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;

use crate::error::{AppError, AppResult};

/// How long an error banner stays visible.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(6);

/// How long the "Copied!" label replaces the copy button text.
pub const COPY_FEEDBACK_TIMEOUT: Duration = Duration::from_millis(1200);

const APP_DIR: &str = "jamii";
const USER_ID_FILE: &str = "user_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Local,
}

impl StoreKind {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "sqlite" | "" => Ok(StoreKind::Sqlite),
            "local" | "json" => Ok(StoreKind::Local),
            other => Err(AppError::config(format!(
                "unknown store '{}', expected 'sqlite' or 'local'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreKind,
    pub db_path: PathBuf,
    pub local_path: PathBuf,
    pub user_id: String,
}

impl AppConfig {
    /// Builds the configuration from `JAMII_*` variables.
    ///
    /// When `JAMII_USER_ID` is unset a random id is generated on first run
    /// and kept in the data directory so the same person keeps ownership of
    /// their rows across restarts.
    pub fn from_env() -> AppResult<Self> {
        let data_dir = default_data_dir();

        let store = match env::var("JAMII_STORE") {
            Ok(value) => StoreKind::parse(&value)?,
            Err(_) => StoreKind::Sqlite,
        };
        let db_path = env::var("JAMII_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("jamii.db"));
        let local_path = env::var("JAMII_LOCAL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("records.json"));
        let user_id = match env::var("JAMII_USER_ID") {
            Ok(id) => id.trim().to_string(),
            Err(_) => load_or_create_user_id(&data_dir)?,
        };

        let config = Self {
            store,
            db_path,
            local_path,
            user_id,
        };
        validate_config(&config)?;
        Ok(config)
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Reads the persisted user id from `dir`, creating one if missing.
pub fn load_or_create_user_id(dir: &Path) -> AppResult<String> {
    let path = dir.join(USER_ID_FILE);
    if let Ok(existing) = std::fs::read_to_string(&path) {
        let existing = existing.trim();
        if !existing.is_empty() {
            return Ok(existing.to_string());
        }
    }

    let id = uuid::Uuid::new_v4().to_string();
    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, &id)?;
    info!("Generated new user id at {}", path.display());
    Ok(id)
}

pub fn validate_config(config: &AppConfig) -> AppResult<()> {
    if config.user_id.is_empty() {
        return Err(AppError::config("user id must not be empty"));
    }
    info!("Configuration: store={:?}, user={}", config.store, config.user_id);
    Ok(())
}
