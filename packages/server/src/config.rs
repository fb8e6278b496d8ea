use std::env;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub primary_database_url: String,
    pub replica_database_url: String,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "4005".to_string());

        let port = port_str.parse::<u16>()?;

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        // The two pools are configured independently; there are no defaults
        // because pointing both at one instance silently disables routing.
        let primary_database_url = env::var("PRIMARY_DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("PRIMARY_DATABASE_URL"))?;
        let replica_database_url = env::var("REPLICA_DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("REPLICA_DATABASE_URL"))?;

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidValue("DB_MAX_CONNECTIONS", e.to_string()))?;

        Ok(Config {
            port,
            cors_origin,
            primary_database_url,
            replica_database_url,
            db_max_connections,
        })
    }
}
