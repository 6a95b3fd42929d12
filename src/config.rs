use serde::{Deserialize, Serialize};

use crate::error::{BrandzError, Result};

/// Placeholder shipped in sample `.env` files; treated the same as a missing key.
pub const API_KEY_PLACEHOLDER: &str = "your_gemini_api_key_here";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_HTTP_BIND: &str = "127.0.0.1:8501";
pub const DEFAULT_LOG_LEVEL: &str = "brandz=info,tower_http=info";

/// Main configuration structure loaded from brandz.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Secrets loaded from environment variables only
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Upstream model settings. Sampling parameters are fixed in `clients::gemini`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub model: String,
    pub api_base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub http_bind: std::net::SocketAddr,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_bind: DEFAULT_HTTP_BIND
                .parse()
                .expect("default bind address should parse"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub gemini_api_key: Option<String>,
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            gemini_api_key: lookup("GEMINI_API_KEY"),
        }
    }
}

impl Config {
    /// Load configuration with the following precedence (highest first):
    /// environment variables, the TOML file, built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        // 1) BRANDZ_ENV_FILE if set
        // 2) ./.env
        if let Ok(env_path) = std::env::var("BRANDZ_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::dotenv();
        }

        let config_path =
            std::env::var("BRANDZ_CONFIG").unwrap_or_else(|_| "brandz.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.runtime = RuntimeConfig::load_from_env();
        Ok(config)
    }

    /// Apply env-style overrides on top of file/default values.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(model) = lookup("BRANDZ_MODEL").filter(|v| !v.trim().is_empty()) {
            self.gemini.model = model;
        }
        if let Some(base) = lookup("BRANDZ_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.gemini.api_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(bind) = lookup("BRANDZ_HTTP_BIND") {
            match bind.parse() {
                Ok(addr) => self.server.http_bind = addr,
                Err(_) => tracing::warn!("Ignoring invalid BRANDZ_HTTP_BIND value: {}", bind),
            }
        }
        if let Some(level) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
            self.server.log_level = level;
        }
    }

    /// The Gemini API key, or a configuration error when it is missing or
    /// still the sample placeholder.
    pub fn api_key(&self) -> Result<&str> {
        match self.runtime.gemini_api_key.as_deref().map(str::trim) {
            None | Some("") => Err(BrandzError::Config {
                message: "GEMINI_API_KEY is not set".to_string(),
            }),
            Some(API_KEY_PLACEHOLDER) => Err(BrandzError::Config {
                message: format!("GEMINI_API_KEY is still the placeholder '{API_KEY_PLACEHOLDER}'"),
            }),
            Some(key) => Ok(key),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.runtime.gemini_api_key = Some(key.into());
        self
    }
}
