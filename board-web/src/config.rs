//! Frontend configuration module
//!
//! Values are baked in at build time from the environment so the bundle can
//! be pointed at a different backend without code changes.

use std::str::FromStr;
use tracing::Level;

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Frontend configuration for the backend location, storage and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL every API path is joined to. May be origin-relative.
    pub api_base_url: String,
    /// `localStorage` key holding the bearer token.
    pub token_storage_key: String,
    /// Most verbose level forwarded to the browser console.
    pub log_level: Level,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("BOARD_API_BASE_URL"),
            option_env!("BOARD_TOKEN_STORAGE_KEY"),
            option_env!("BOARD_LOG_LEVEL"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    fn from_values(
        api_base_url: Option<&str>,
        token_storage_key: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let token_storage_key = token_storage_key
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_TOKEN_STORAGE_KEY)
            .to_string();
        let log_level = log_level
            .and_then(|value| Level::from_str(value.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base_url,
            token_storage_key,
            log_level,
        }
    }

    /// Resolve the API base against `origin` when it is origin-relative.
    ///
    /// The HTTP client only accepts absolute URLs.
    pub fn resolve_api_base(&self, origin: Option<&str>) -> String {
        if self.api_base_url.starts_with('/') {
            if let Some(origin) = origin {
                return format!("{}{}", origin.trim_end_matches('/'), self.api_base_url);
            }
        }
        self.api_base_url.clone()
    }
}
