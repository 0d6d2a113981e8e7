use std::{ env, net::{ IpAddr, SocketAddr } };

use serde::Deserialize;

use super::ConfigError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::Config(format!("Unknown ENVIRONMENT: {}", other))),
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawServerConfig {
    pub host: String,
    pub port: String,
    pub environment: String,
}

impl RawServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Config("HOST cannot be empty".into()));
        }
        if self.port.trim().is_empty() {
            return Err(ConfigError::Config("PORT cannot be empty".into()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
}

impl ServerConfig {
    pub fn from_raw(raw: RawServerConfig) -> Result<Self, ConfigError> {
        raw.validate()?;

        let host: IpAddr = raw.host
            .trim()
            .parse()
            .map_err(|e| ConfigError::Config(format!("Failed to parse HOST: {}", e)))?;
        let port: u16 = raw.port
            .trim()
            .parse()
            .map_err(|e| ConfigError::Config(format!("Failed to parse PORT: {}", e)))?;
        if port == 0 {
            return Err(ConfigError::Config("PORT must be greater than zero".into()));
        }

        Ok(Self {
            host,
            port,
            environment: Environment::parse(&raw.environment)?,
        })
    }

    pub fn new() -> Result<Self, ConfigError> {
        let raw = RawServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        };

        ServerConfig::from_raw(raw)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            environment: Environment::Development,
        }
    }
}
