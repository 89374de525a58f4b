//! Application Configuration
//!
//! Baked in at compile time from `TASKBOARD_*` environment variables and
//! shared through context.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API origin; empty means the page's own origin
    pub api_base_url: String,
    pub auth_header: String,
    /// Session storage key holding the bearer token
    pub token_key: String,
    /// How long a toast stays visible
    pub toast_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            auth_header: "Authorization".to_string(),
            token_key: "token".to_string(),
            toast_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("TASKBOARD_API_URL") {
            config.api_base_url = url.to_string();
        }
        if let Some(level) = option_env!("TASKBOARD_LOG_LEVEL") {
            config.log_level = level.to_string();
        }
        config
    }

    /// Base URL without trailing slash, falling back to `origin`
    pub fn resolve_base(&self, origin: &str) -> String {
        let base = self.api_base_url.trim();
        let base = if base.is_empty() { origin } else { base };
        base.trim_end_matches('/').to_string()
    }
}
