use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL not set")]
    MissingDatabaseUrl,
    #[error("invalid HOST/PORT: {0}")]
    InvalidAddr(String),
    #[error("invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub database_url: String,
    pub db_pool_max_size: u32,
    pub db_connection_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("POSTGRES_URL"))
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = parse_or("PORT", lookup("PORT"), 8080)?;
        let addr = resolve_addr(&host, port)?;

        let db_pool_max_size: u32 = parse_or("DB_POOL_MAX_SIZE", lookup("DB_POOL_MAX_SIZE"), 10)?;
        reject_zero("DB_POOL_MAX_SIZE", u64::from(db_pool_max_size))?;
        let timeout_secs: u64 = parse_or(
            "DB_CONNECTION_TIMEOUT_SECS",
            lookup("DB_CONNECTION_TIMEOUT_SECS"),
            5,
        )?;
        reject_zero("DB_CONNECTION_TIMEOUT_SECS", timeout_secs)?;

        Ok(Self {
            addr,
            database_url,
            db_pool_max_size,
            db_connection_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// `HOST` may be an IP literal or a resolvable name such as `localhost`.
fn resolve_addr(host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    let invalid = || ConfigError::InvalidAddr(format!("{}:{}", host, port));
    (host, port)
        .to_socket_addrs()
        .map_err(|_| invalid())?
        .next()
        .ok_or_else(invalid)
}

fn reject_zero(key: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidNumber {
            key,
            value: "0".to_string(),
        });
    }
    Ok(())
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
