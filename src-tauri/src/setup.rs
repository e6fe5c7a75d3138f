use log::{info, warn};
use tauri::Manager;
use tauri_plugin_store::StoreExt;

use crate::config::{Config, OpenAIConfig};
use crate::keychain::{self, ProviderAccount};
use crate::session::SessionStateManager;
use crate::telemetry;

/// Keeps the Sentry client alive for the lifetime of the app
pub struct TelemetryGuard(#[allow(dead_code)] Option<sentry::ClientInitGuard>);

pub fn setup_app(app: &mut tauri::App) -> Result<(), Box<dyn std::error::Error>> {
    info!("Audioscribe v{}", env!("CARGO_PKG_VERSION"));

    let store = app.store("config.json")?;
    let config = Config::new(store);

    let guard = telemetry::init_sentry(&config);
    app.manage(TelemetryGuard(guard));

    // Surface a missing credential early; transcription fails without one
    let has_credential = keychain::load_provider_config::<OpenAIConfig>(ProviderAccount::OpenAI)
        .ok()
        .flatten()
        .is_some()
        || std::env::var("OPENAI_API_KEY").is_ok_and(|key| !key.trim().is_empty());
    if !has_credential {
        warn!("No OpenAI API key configured");
    }

    app.manage(config);
    app.manage(SessionStateManager::new());

    Ok(())
}
