//! Runtime configuration from environment variables (optionally via `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://catalogue.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Holds index.html, login.html, register.html, catalogue.html and 404.html.
    pub static_dir: PathBuf,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl Config {
    /// Reads `DATABASE_URL`, `BIND_ADDR`, `STATIC_DIR`, `MAX_CONNECTIONS` and `BODY_LIMIT_BYTES`.
    /// A `.env` file in the working directory is loaded first; real env vars win.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into());
        Ok(Config {
            database_url,
            bind_addr: parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR)?,
            static_dir: PathBuf::from(static_dir),
            max_connections: parse_or_value("MAX_CONNECTIONS", lookup("MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?,
            body_limit_bytes: parse_or_value("BODY_LIMIT_BYTES", lookup("BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT_BYTES)?,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: &str) -> Result<T, ConfigError> {
    let value = raw.unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

fn parse_or_value<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
