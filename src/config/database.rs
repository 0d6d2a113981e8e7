use std::{ env, path::{ Path, PathBuf } };

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_DATABASE_PATH: &str = "instance/database.db";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")] Config(String),

    #[error("Template error: {0}")] Template(#[from] handlebars::TemplateError),

    #[error("Storage error: {0}")] Storage(#[from] crate::database::StoreError),
}

/*
DatabaseConfig is split in two:
      - RawDatabaseConfig holds the values exactly as read from the environment
      - DatabaseConfig holds the validated, typed values
*/

#[derive(Debug, Deserialize, Clone)]
pub struct RawDatabaseConfig {
    pub database_path: String,
}

impl RawDatabaseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.trim().is_empty() {
            return Err(ConfigError::Config("DATABASE_PATH cannot be empty".into()));
        }
        if self.database_path.trim() == ":memory:" {
            // every request opens its own connection, so an in-memory database would be empty each time
            return Err(ConfigError::Config("DATABASE_PATH must point at a file".into()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_path: PathBuf,
}

impl DatabaseConfig {
    /// Build from a RawDatabaseConfig.
    pub fn from_raw(raw: RawDatabaseConfig) -> Result<Self, ConfigError> {
        raw.validate()?;

        Ok(Self {
            database_path: PathBuf::from(raw.database_path.trim()),
        })
    }

    /// Load from environment variables, falling back to `instance/database.db`.
    pub fn new() -> Result<Self, ConfigError> {
        let raw = RawDatabaseConfig {
            database_path: env
                ::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        };

        DatabaseConfig::from_raw(raw)
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            database_path: path.as_ref().to_path_buf(),
        }
    }

    /// Connection string handed to `SqliteConnection::establish`.
    pub fn database_url(&self) -> String {
        self.database_path.to_string_lossy().into_owned()
    }
}
