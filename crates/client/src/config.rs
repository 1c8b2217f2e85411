use shared_types::{ApiSettings, AppConfig};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `.env` and `config.toml`, apply environment overrides, and store the
/// result in the global `OnceLock`. Only the first call does any work.
///
/// A missing or unparseable file falls back to defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }
        let mut config = read_config_file(Path::new(CONFIG_PATH));
        apply_env_overrides(&mut config.api, |key| std::env::var(key).ok());
        tracing::info!(
            base_url = %config.api.base_url,
            timeout_secs = config.api.timeout_secs,
            "Registry API configured"
        );
        config
    })
}

pub fn api_settings() -> &'static ApiSettings {
    &load_config().api
}

pub fn read_config_file(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Config file not found, using defaults");
            AppConfig::default()
        }
    }
}

/// Apply `REGISTRY_API_URL`, `REGISTRY_API_KEY` and `REGISTRY_TIMEOUT_SECS`.
pub fn apply_env_overrides(settings: &mut ApiSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("REGISTRY_API_URL").filter(|v| !v.trim().is_empty()) {
        settings.base_url = url.trim().to_string();
    }
    if let Some(key) = lookup("REGISTRY_API_KEY").filter(|v| !v.trim().is_empty()) {
        settings.api_key = Some(key.trim().to_string());
    }
    if let Some(raw) = lookup("REGISTRY_TIMEOUT_SECS") {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => settings.timeout_secs = secs,
            _ => tracing::warn!(value = %raw, "Ignoring invalid REGISTRY_TIMEOUT_SECS"),
        }
    }
}
