//! Service configuration from environment variables.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub const LISTEN_PORT: u16 = 8090;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub store: StoreConfig,
    pub listen_addr: SocketAddr,
    /// Run `CREATE TABLE IF NOT EXISTS articles` at startup.
    pub ensure_schema: bool,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Full connection URL; wins over the individual fields when set.
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let store = StoreConfig {
            user: var("ARTICLES_DB_USER", "postgres"),
            password: var("ARTICLES_DB_PASSWORD", ""),
            host: var("ARTICLES_DB_HOST", "127.0.0.1"),
            port: parse_var(&lookup, "ARTICLES_DB_PORT", 5432)?,
            database: var("ARTICLES_DB_NAME", "articles"),
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            max_connections: parse_var(&lookup, "ARTICLES_DB_MAX_CONNECTIONS", 5)?,
        };
        store.validate()?;

        Ok(ServiceConfig {
            store,
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT)),
            ensure_schema: parse_var(&lookup, "ARTICLES_ENSURE_SCHEMA", false)?,
        })
    }
}

impl StoreConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.database_url {
            PgConnectOptions::from_str(url).map_err(|_| ConfigError::InvalidValue {
                key: "DATABASE_URL",
                value: url.clone(),
            })?;
        }
        Ok(())
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        if let Some(opts) = self
            .database_url
            .as_deref()
            .and_then(|url| PgConnectOptions::from_str(url).ok())
        {
            return opts;
        }
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
