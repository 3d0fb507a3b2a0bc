use dotenvy::dotenv;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://mood-music-backend-5n42.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LOG_FILE: &str = "/tmp/moodsync.log";
const MAX_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MOODSYNC_API_URL must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),
    #[error("MOODSYNC_TIMEOUT_SECS must be a whole number between 1 and 120, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    pub log_file: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok(); // .env is optional; plain environment variables work too
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("MOODSYNC_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(api_url));
        }

        let timeout_secs = match lookup("MOODSYNC_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| (1..=MAX_TIMEOUT_SECS).contains(secs))
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
            log_file: lookup("MOODSYNC_LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        })
    }
}
