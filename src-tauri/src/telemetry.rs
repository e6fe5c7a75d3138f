use log::{info, warn};
use uuid::Uuid;

use crate::config::{Config, ConfigKey, ConfigStore, TelemetryConfig};

/// Get or create a stable anonymous device ID for error reporting
///
/// If a device ID already exists in the config, it will be returned.
/// Otherwise, a new UUID v4 will be generated and stored.
pub fn get_or_create_device_id(config: &Config) -> String {
    if let Some(telemetry) = config.get(&ConfigKey::TELEMETRY) {
        return telemetry.device_id;
    }

    let device_id = Uuid::new_v4().to_string();
    info!("Generated new device ID for telemetry");

    let telemetry_config = TelemetryConfig {
        device_id: device_id.clone(),
        telemetry_enabled: true,
    };
    if let Err(e) = config.set(&ConfigKey::TELEMETRY, telemetry_config) {
        warn!("Failed to save telemetry config: {}", e);
    }

    device_id
}

/// Initialize Sentry for error tracking
///
/// Reads SENTRY_DSN from the build-time environment (baked into the
/// binary). If it is absent, or the user disabled telemetry, reporting
/// stays off and `None` is returned.
pub fn init_sentry(config: &Config) -> Option<sentry::ClientInitGuard> {
    const DSN: Option<&str> = option_env!("SENTRY_DSN");

    let dsn = match DSN {
        Some(dsn) if !dsn.is_empty() => dsn,
        _ => {
            info!("Sentry DSN not configured, telemetry disabled");
            return None;
        }
    };

    let enabled = config
        .get(&ConfigKey::TELEMETRY)
        .map(|t| t.telemetry_enabled)
        .unwrap_or(true);
    if !enabled {
        info!("Telemetry disabled by user");
        return None;
    }

    // sentry::init can panic on a malformed DSN, so validate first
    let parsed_dsn = match dsn.parse::<sentry::types::Dsn>() {
        Ok(dsn) => dsn,
        Err(e) => {
            warn!("Invalid Sentry DSN format: {}. Telemetry disabled.", e);
            return None;
        }
    };

    let device_id = get_or_create_device_id(config);

    let guard = sentry::init(sentry::ClientOptions {
        dsn: Some(parsed_dsn),
        release: sentry::release_name!(),
        environment: Some(if cfg!(debug_assertions) {
            "development".into()
        } else {
            "production".into()
        }),
        ..Default::default()
    });

    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(device_id),
            ..Default::default()
        }));
    });

    info!("Sentry initialized");
    Some(guard)
}
