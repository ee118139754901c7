//! Startup configuration, read once from the environment.
//!
//! - `COOKBOOK_BIND`: listen address (default `0.0.0.0:8000`)
//! - `COOKBOOK_CORS_ORIGINS`: comma separated allowed origins
//!   (default `http://localhost:5173,http://localhost:3000`)
//! - `COOKBOOK_SEED`: `true`/`false`, load sample recipes (default `true`)

use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

#[derive(Error, Debug)]
#[error("Invalid {key} value {value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub cors_origins: Vec<HeaderValue>,
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, so tests need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let load = |key: &'static str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                tracing::debug!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let bind = load("COOKBOOK_BIND", DEFAULT_BIND);
        let bind_addr: SocketAddr = bind.parse().map_err(|e: std::net::AddrParseError| ConfigError {
            key: "COOKBOOK_BIND",
            value: bind.clone(),
            reason: e.to_string(),
        })?;

        let origins = load("COOKBOOK_CORS_ORIGINS", DEFAULT_CORS_ORIGINS);
        let cors_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| {
                HeaderValue::from_str(o).map_err(|e| ConfigError {
                    key: "COOKBOOK_CORS_ORIGINS",
                    value: o.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let seed_raw = load("COOKBOOK_SEED", "true");
        let seed = match seed_raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => {
                return Err(ConfigError {
                    key: "COOKBOOK_SEED",
                    value: seed_raw,
                    reason: "expected true or false".to_string(),
                })
            }
        };

        Ok(Self {
            bind_addr,
            cors_origins,
            seed,
        })
    }
}
