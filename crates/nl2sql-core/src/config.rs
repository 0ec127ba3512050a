use crate::errors::ConfigError;

pub mod suite;

pub use suite::{load_suite, write_sample_suite, SUPPORTED_SUITE_VERSION};

pub const TOKEN_ENV: &str = "HUGGINGFACE_API_TOKEN";
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.3";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Everything the inference client needs, passed in explicitly at construction.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_token: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: api_token.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// Environment variables:
    /// - `HUGGINGFACE_API_TOKEN`: bearer token (required)
    /// - `NL2SQL_API_URL`: inference endpoint override
    /// - `NL2SQL_TIMEOUT_SECONDS`: per-request timeout
    /// - `NL2SQL_MAX_RETRIES`: retry budget while the model is loading
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_ENV)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(TOKEN_ENV.to_string()))?;

        let mut cfg = Self::new(token);
        if let Some(url) = lookup("NL2SQL_API_URL") {
            cfg.api_url = url;
        }
        if let Some(v) = lookup("NL2SQL_TIMEOUT_SECONDS") {
            if let Ok(n) = v.parse() {
                cfg.timeout_seconds = n;
            }
        }
        if let Some(v) = lookup("NL2SQL_MAX_RETRIES") {
            if let Ok(n) = v.parse() {
                cfg.max_retries = n;
            }
        }
        Ok(cfg)
    }
}
