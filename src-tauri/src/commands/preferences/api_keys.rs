use log::error;
use secrecy::SecretString;
use serde::Serialize;

use crate::clients::{ApiConfig, Transcriber};
use crate::config::OpenAIConfig;
use crate::keychain::{self, ProviderAccount};

/// Frontend-facing status for the OpenAI credential (never exposes the key)
#[derive(Debug, Clone, Serialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct OpenAIConfigStatus {
    pub configured: bool,
}

// ===== OPENAI PROVIDER COMMANDS =====

#[tauri::command]
#[specta::specta]
pub fn load_openai_config() -> Result<Option<OpenAIConfigStatus>, String> {
    let config =
        keychain::load_provider_config::<OpenAIConfig>(ProviderAccount::OpenAI).map_err(|e| {
            let err = format!("Failed to load OpenAI config: {}", e);
            error!("{}", err);
            err
        })?;

    Ok(config.map(|_| OpenAIConfigStatus { configured: true }))
}

#[tauri::command]
#[specta::specta]
pub fn save_openai_config(api_key: String) -> Result<(), String> {
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        return Err("API key cannot be empty".to_string());
    }

    let config = OpenAIConfig { api_key };

    keychain::save_provider_config(ProviderAccount::OpenAI, &config).map_err(|e| {
        let err = format!("Failed to save OpenAI config: {}", e);
        error!("{}", err);
        err
    })
}

#[tauri::command]
#[specta::specta]
pub fn delete_openai_config() -> Result<(), String> {
    keychain::delete_provider_config(ProviderAccount::OpenAI).map_err(|e| {
        let err = format!("Failed to delete OpenAI config: {}", e);
        error!("{}", err);
        err
    })
}

#[tauri::command]
#[specta::specta]
pub fn test_openai_config(api_key: String) -> Result<bool, String> {
    let config = ApiConfig {
        api_key: SecretString::from(api_key),
    };

    Transcriber::test_api_key(&config).map_err(|e| {
        let err = format!("Failed to test OpenAI config: {}", e);
        error!("{}", err);
        err
    })
}
