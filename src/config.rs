// src/config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_TABLE: &str = "land_listings";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value:?}: {reason}")]
    BindAddr { value: String, reason: String },

    #[error("invalid MAX_WORKERS {0:?}: expected a positive integer")]
    MaxWorkers(String),
}

/// Where the listings live and how to authenticate against the backend.
///
/// Empty values are allowed here; they only fail once a fetch is attempted.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base endpoint, e.g. "https://abc.supabase.co"
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

impl AppConfig {
    /// Read the whole configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut backend = BackendConfig::new(
            non_empty("SUPABASE_URL").unwrap_or_default(),
            non_empty("SUPABASE_ANON_KEY").unwrap_or_default(),
        );
        if let Some(table) = non_empty("LISTINGS_TABLE") {
            backend.table = table;
        }

        let raw_addr = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::BindAddr {
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        let max_workers = match non_empty("MAX_WORKERS") {
            None => DEFAULT_MAX_WORKERS,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::MaxWorkers(raw)),
            },
        };

        Ok(Self {
            backend,
            bind_addr,
            max_workers,
        })
    }
}
