use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::marker::PhantomData;

/// Default upload ceiling enforced before any network activity
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

/// Default MIME subtype / extension assumed when a picked file has none
pub const DEFAULT_FALLBACK_EXTENSION: &str = "mp3";

/// Type-safe configuration key that associates a key name with its value type
#[derive(Debug, Clone, Copy)]
pub struct ConfigKey<T> {
    name: &'static str,
    _phantom: PhantomData<T>,
}

impl<T> ConfigKey<T> {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: PhantomData,
        }
    }

    pub fn key_name(&self) -> &'static str {
        self.name
    }
}

// ===== App Configuration =====

fn default_max_upload_bytes() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_fallback_extension() -> String {
    DEFAULT_FALLBACK_EXTENSION.to_string()
}

/// App configuration (stored locally)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Largest audio file accepted for upload, in bytes
    #[serde(default = "default_max_upload_bytes", alias = "max_upload_bytes")]
    pub max_upload_bytes: u64,
    /// Audio subtype assumed when the picked file carries no extension
    #[serde(default = "default_fallback_extension", alias = "fallback_extension")]
    pub fallback_extension: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            fallback_extension: default_fallback_extension(),
        }
    }
}

impl ConfigKey<AppConfig> {
    pub const APP: Self = Self::new("appConfig");
}

// ===== Telemetry Configuration =====

/// Telemetry configuration (stored locally)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Stable anonymous id for error reporting
    #[serde(alias = "device_id")]
    pub device_id: String,
    #[serde(default, alias = "telemetry_enabled")]
    pub telemetry_enabled: bool,
}

impl ConfigKey<TelemetryConfig> {
    pub const TELEMETRY: Self = Self::new("telemetryConfig");
}

// ===== Keychain-stored Configurations (no keys) =====

/// OpenAI provider configuration (stored in keychain)
#[derive(Debug, Clone, Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct OpenAIConfig {
    pub api_key: String,
}

// ===== Type-Safe Config Store =====

pub trait ConfigStore {
    fn get<T: DeserializeOwned>(&self, key: &ConfigKey<T>) -> Option<T>;
    fn set<T: Serialize>(&self, key: &ConfigKey<T>, value: T) -> Result<(), String>;
    fn delete<T>(&self, key: &ConfigKey<T>) -> Result<(), String>;
}

/// Type-safe configuration store that wraps the Tauri plugin store
#[derive(Clone)]
pub struct Config {
    store: std::sync::Arc<tauri_plugin_store::Store<tauri::Wry>>,
}

impl Config {
    pub fn new(store: std::sync::Arc<tauri_plugin_store::Store<tauri::Wry>>) -> Self {
        Self { store }
    }

    /// App config with defaults applied when nothing is stored yet
    pub fn app_config(&self) -> AppConfig {
        self.get(&ConfigKey::APP).unwrap_or_default()
    }
}

impl ConfigStore for Config {
    fn get<T: DeserializeOwned>(&self, key: &ConfigKey<T>) -> Option<T> {
        self.store
            .get(key.key_name())
            .and_then(|v| serde_json::from_value(v).ok())
    }

    fn set<T: Serialize>(&self, key: &ConfigKey<T>, value: T) -> Result<(), String> {
        let val = serde_json::to_value(value).map_err(|e| e.to_string())?;
        self.store.set(key.key_name(), val);
        self.store.save().map_err(|e| e.to_string())?;
        Ok(())
    }

    fn delete<T>(&self, key: &ConfigKey<T>) -> Result<(), String> {
        self.store.delete(key.key_name());
        self.store.save().map_err(|e| e.to_string())?;
        Ok(())
    }
}
