use serde::{Deserialize, Serialize};

/// API connection settings, read from the `[api]` table of `config.toml`.
///
/// Every field has a default so that a missing or partial config file still
/// yields a usable client pointed at a local backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as `X-API-Key` on create, update and delete requests when set.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Quiet period before a search filter triggers a fetch.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_page_delta")]
    pub page_delta: i64,
    /// Oldest year offered by the year filter.
    #[serde(default = "default_year_floor")]
    pub year_floor: i32,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_search_debounce_ms() -> u64 {
    400
}

fn default_page_delta() -> i64 {
    crate::pagination::DEFAULT_PAGE_DELTA
}

fn default_year_floor() -> i32 {
    2018
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            search_debounce_ms: default_search_debounce_ms(),
            page_delta: default_page_delta(),
            year_floor: default_year_floor(),
        }
    }
}

impl ApiSettings {
    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
}
