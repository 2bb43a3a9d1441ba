// config.rs
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "https://rebaapp.com",
    "https://www.rebaapp.com",
    "http://rebaapp.com",
    "http://www.rebaapp.com",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// RapidAPI key. Upstream calls fail with `MissingApiKey` when unset.
    pub rapidapi_key: Option<String>,
    pub rapidapi_host: String,
    /// Base URL of the Realty provider, overridable for local stubs.
    pub realty_base_url: String,
    pub request_timeout_secs: u64,
    pub max_workers: usize,
    /// Default number of listings requested for a neighborhood search.
    pub list_limit: usize,
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            rapidapi_key: None,
            rapidapi_host: "realty-in-us.p.rapidapi.com".to_string(),
            realty_base_url: "https://realty-in-us.p.rapidapi.com".to_string(),
            request_timeout_secs: 30,
            max_workers: 8,
            list_limit: 10,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Config::default();

        if let Some(host) = get("HOST") {
            cfg.host = host;
        }
        if let Some(v) = get("PORT") {
            cfg.port = parse_var("PORT", &v)?;
        }
        cfg.rapidapi_key = get("RAPIDAPI_KEY");
        if let Some(host) = get("RAPIDAPI_HOST") {
            cfg.rapidapi_host = host;
        }
        if let Some(url) = get("REALTY_BASE_URL") {
            cfg.realty_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(v) = get("REQUEST_TIMEOUT_SECS") {
            cfg.request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = get("MAX_WORKERS") {
            cfg.max_workers = parse_positive("MAX_WORKERS", &v)?;
        }
        if let Some(v) = get("LIST_LIMIT") {
            cfg.list_limit = parse_positive("LIST_LIMIT", &v)?;
        }
        if let Some(v) = get("ALLOWED_ORIGINS") {
            cfg.allowed_origins = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(cfg)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            key: "HOST",
            value: raw,
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn parse_positive(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    match parse_var(key, value)? {
        0 => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
        n => Ok(n),
    }
}
