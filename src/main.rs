// Jamii - family group organiser
// Main entry point for iced application

use std::sync::Arc;

use iced::{Application, Settings};
use log::{error, info};

use jamii::app::JamiiApp;
use jamii::config::AppConfig;
use jamii::store::Backend;
use jamii::utils::logging::{init_logging, log_error_with_context};

#[tokio::main]
async fn main() -> iced::Result {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    info!("Starting Jamii");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store = match Backend::open(&config).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log_error_with_context(e.as_ref(), "Failed to open store");
            eprintln!("Failed to open store: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Signed in as {}", config.user_id);

    JamiiApp::run(Settings {
        window: iced::window::Settings {
            size: iced::Size::new(1100.0, 720.0),
            resizable: true,
            ..Default::default()
        },
        ..Settings::with_flags((store, config.user_id))
    })
}
