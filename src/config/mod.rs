pub mod database;
pub mod logging;
pub mod server;

pub use database::{ DatabaseConfig, ConfigError };
pub use server::{ Environment, ServerConfig };

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::new()?,
            database: DatabaseConfig::new()?,
        })
    }
}
