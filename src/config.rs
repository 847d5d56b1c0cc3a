// src/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::portfolio::domain::locale::{LocaleCode, UnknownLocale};

pub const DEFAULT_API_URL: &str = "http://localhost:10001";
pub const DEFAULT_SLUG: &str = "nguyen-huu-phuoc";
pub const DEFAULT_CREDENTIALS_PATH: &str = ".portfolio/auth.json";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PORTFOLIO_LOCALE: {0}")]
    Locale(#[from] UnknownLocale),

    #[error("Invalid {key} value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Everything the client reads from the environment, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Service origin without trailing slash; routes live under `{api_base_url}/api`.
    pub api_base_url: String,
    /// Shown when neither `/p/:slug` nor `?slug=` names a portfolio.
    pub default_slug: String,
    pub locale: LocaleCode,
    pub credentials_path: PathBuf,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            default_slug: DEFAULT_SLUG.to_string(),
            locale: LocaleCode::En,
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`), then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_base_url = read("PORTFOLIO_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let default_slug = read("PORTFOLIO_DEFAULT_SLUG").unwrap_or(defaults.default_slug);

        let locale = match read("PORTFOLIO_LOCALE") {
            Some(code) => code.parse::<LocaleCode>()?,
            None => defaults.locale,
        };

        let credentials_path = read("PORTFOLIO_CREDENTIALS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.credentials_path);

        let http_timeout = match read("PORTFOLIO_HTTP_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "PORTFOLIO_HTTP_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => defaults.http_timeout,
        };

        Ok(Self {
            api_base_url,
            default_slug,
            locale,
            credentials_path,
            http_timeout,
        })
    }
}
