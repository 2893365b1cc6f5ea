//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SEYA_BACKEND_URL` - Backend base URL (fallback: `BACKEND_URL`,
//!   default: `http://localhost:8000`)
//! - `SEYA_PAGE_URL` - Public URL of the storefront page, used as the checkout
//!   success and cancel URL (default: `http://localhost:3000/`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)

use thiserror::Error;
use url::Url;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_PAGE_URL: &str = "http://localhost:3000/";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Backend base URL
    pub backend_url: Url,
    /// URL of the storefront page itself
    pub page_url: Url,
    /// Error tracking configuration
    pub sentry: SentryConfig,
}

/// Sentry configuration. Error tracking is off when `dsn` is unset.
#[derive(Debug, Clone)]
pub struct SentryConfig {
    pub dsn: Option<String>,
    pub environment: Option<String>,
    pub sample_rate: f32,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: None,
            sample_rate: 1.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a URL or the sample rate does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a URL or the sample rate does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let (backend_key, backend_raw) = lookup("SEYA_BACKEND_URL")
            .map(|value| ("SEYA_BACKEND_URL", value))
            .or_else(|| lookup("BACKEND_URL").map(|value| ("BACKEND_URL", value)))
            .unwrap_or(("SEYA_BACKEND_URL", DEFAULT_BACKEND_URL.to_string()));
        let backend_url = parse_http_url(backend_key, &backend_raw)?;

        let page_raw = lookup("SEYA_PAGE_URL").unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());
        let page_url = parse_http_url("SEYA_PAGE_URL", &page_raw)?;

        let sample_rate = match lookup("SENTRY_SAMPLE_RATE") {
            Some(raw) => parse_sample_rate(&raw)?,
            None => 1.0,
        };

        Ok(Self {
            backend_url,
            page_url,
            sentry: SentryConfig {
                dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
                environment: lookup("SENTRY_ENVIRONMENT"),
                sample_rate,
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an absolute `http`/`https` URL.
fn parse_http_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}

fn parse_sample_rate(raw: &str) -> Result<f32, ConfigError> {
    let rate = raw
        .trim()
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar("SENTRY_SAMPLE_RATE".to_string(), e.to_string()))?;

    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            "SENTRY_SAMPLE_RATE".to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}
