use crate::config::{self, AppConfig, ConfigKey, ConfigStore};
use log::error;
use tauri::State;

// ===== GENERAL APP CONFIGURATION COMMANDS =====

/// Load the entire app configuration
#[tauri::command]
#[specta::specta]
pub fn load_app_config(config_store: State<config::Config>) -> Result<AppConfig, String> {
    Ok(config_store.app_config())
}

/// Save app configuration (general-purpose command that can update multiple fields)
#[tauri::command]
#[specta::specta]
pub fn save_app_config(
    config_store: State<config::Config>,
    max_upload_bytes: Option<u64>,
    fallback_extension: Option<String>,
) -> Result<(), String> {
    // Load existing config to preserve fields that aren't being updated
    let mut config = config_store.app_config();

    // Update the upload ceiling if specified
    if let Some(bytes) = max_upload_bytes {
        if bytes == 0 {
            error!("Rejecting zero upload ceiling");
            return Err("max_upload_bytes must be positive".to_string());
        }
        config.max_upload_bytes = bytes;
    }

    // Update the fallback extension if specified
    if let Some(extension) = fallback_extension {
        let extension = extension
            .trim()
            .trim_start_matches('.')
            .to_ascii_lowercase();
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            error!("Rejecting invalid fallback extension: '{}'", extension);
            return Err(format!("Invalid fallback extension: '{}'", extension));
        }
        config.fallback_extension = extension;
    }

    config_store.set(&ConfigKey::APP, config)
}
