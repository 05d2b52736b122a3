// config.rs
//
// Runtime settings, read from the environment. Everything has a default so
// the server starts with no configuration at all.

use crate::cache::CachePolicy;
use crate::fetcher::DEFAULT_PAGE_SIZE;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://data.sfgov.org/resource/g8m3-pdis.json";

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub api_base: String,
    pub app_token: Option<String>,
    pub page_size: usize,
    pub http_timeout: Duration,
    pub stale_after: Duration,
    pub evict_after: Duration,
    pub max_retries: u32,
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_var(&lookup, "NHOOD_BIND_ADDR", default_bind_addr())?;
        let max_workers = parse_var(&lookup, "NHOOD_MAX_WORKERS", 8usize)?;
        let page_size = parse_var(&lookup, "NHOOD_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let timeout_secs = parse_var(&lookup, "NHOOD_HTTP_TIMEOUT_SECS", 60u64)?;
        let stale_secs = parse_var(&lookup, "NHOOD_STALE_SECS", 5 * 60u64)?;
        let evict_secs = parse_var(&lookup, "NHOOD_EVICT_SECS", 10 * 60u64)?;
        let max_retries = parse_var(&lookup, "NHOOD_MAX_RETRIES", 3u32)?;

        require_positive("NHOOD_MAX_WORKERS", max_workers)?;
        require_positive("NHOOD_PAGE_SIZE", page_size)?;

        Ok(Self {
            bind_addr,
            max_workers,
            api_base: non_empty(&lookup, "NHOOD_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            app_token: non_empty(&lookup, "SOCRATA_APP_TOKEN"),
            page_size,
            http_timeout: Duration::from_secs(timeout_secs),
            stale_after: Duration::from_secs(stale_secs),
            evict_after: Duration::from_secs(evict_secs),
            max_retries,
            log_level: non_empty(&lookup, "NHOOD_LOG_LEVEL"),
        })
    }

    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy {
            stale_after: self.stale_after,
            evict_after: self.evict_after,
            max_retries: self.max_retries,
            ..CachePolicy::default()
        }
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

fn require_positive(key: &'static str, value: usize) -> Result<(), ConfigError> {
    match value {
        0 => Err(ConfigError::Invalid {
            key,
            value: "0".into(),
            reason: "must be at least 1".into(),
        }),
        _ => Ok(()),
    }
}
