use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;

use roster_storage::DatabaseConfig;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 9898;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),
    #[error("Invalid value for {var}: {source}")]
    InvalidNumber {
        var: &'static str,
        source: ParseIntError,
    },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_address: IpAddr,
    /// When set, browsers from this origin may call the API
    pub cors_origin: Option<String>,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse::<u16>()?;

        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let bind_address = match env::var("BIND_ADDRESS") {
            Ok(raw) => IpAddr::from_str(raw.trim())
                .map_err(|_| ConfigError::InvalidBindAddress(raw))?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let cors_origin = env::var("CORS_ORIGIN")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Config {
            port,
            bind_address,
            cors_origin,
            database: database_from_env()?,
        })
    }

    /// Apply command-line flags on top of the environment
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        bind_address: Option<IpAddr>,
    ) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            if port == 0 {
                return Err(ConfigError::PortOutOfRange(port));
            }
            self.port = port;
        }
        if let Some(addr) = bind_address {
            self.bind_address = addr;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

fn database_from_env() -> Result<DatabaseConfig, ConfigError> {
    let defaults = DatabaseConfig::default();

    let max_connections = parse_var("DB_MAX_CONNECTIONS", defaults.max_connections)?;
    if max_connections == 0 {
        return Err(ConfigError::Zero("DB_MAX_CONNECTIONS"));
    }

    let acquire_timeout_secs =
        parse_var("DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout.as_secs())?;

    Ok(DatabaseConfig {
        host: env::var("DB_HOST").unwrap_or(defaults.host),
        port: parse_var("DB_PORT", defaults.port)?,
        user: env::var("DB_USER").unwrap_or(defaults.user),
        password: env::var("DB_PASSWORD").unwrap_or(defaults.password),
        database: env::var("DB_NAME").unwrap_or(defaults.database),
        max_connections,
        acquire_timeout: Duration::from_secs(acquire_timeout_secs),
    })
}

fn parse_var<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr<Err = ParseIntError>,
{
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|source| ConfigError::InvalidNumber { var, source }),
        Err(_) => Ok(default),
    }
}
