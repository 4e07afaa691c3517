//! Process configuration from environment variables (and `.env` via dotenvy in the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Which `SupplierStore` backend the server runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub backend: StoreBackend,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub read_timeout: Duration,
    pub body_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());
                let port: u16 = parse_or(&lookup, "DB_PORT", 5432)?;
                let user = lookup("DB_USER").unwrap_or_else(|| "myuser".into());
                let password = lookup("DB_PASSWORD").unwrap_or_else(|| "mypassword".into());
                let name = lookup("DB_NAME").unwrap_or_else(|| "mydatabase".into());
                format!(
                    "postgres://{}:{}@{}:{}/{}?sslmode=disable",
                    user, password, host, port, name
                )
            }
        };
        let backend = match lookup("STORE_BACKEND") {
            Some(s) => s.parse()?,
            None => StoreBackend::Postgres,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(s) => s.parse().map_err(|_| ConfigError::InvalidValue {
                key: "BIND_ADDR",
                value: s,
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };
        Ok(Config {
            database_url,
            backend,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            bind_addr,
            read_timeout: Duration::from_secs(parse_or(&lookup, "READ_TIMEOUT_SECS", 5)?),
            body_limit: parse_or(&lookup, "BODY_LIMIT_BYTES", 64 * 1024)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
