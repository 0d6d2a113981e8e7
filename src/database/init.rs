use std::{ fs, path::Path };

use diesel::{ connection::SimpleConnection, prelude::*, SqliteConnection };
use tracing::{ debug, info };

use crate::{ config::DatabaseConfig, database::StoreError };

pub const SCHEMA_SQL: &str = include_str!("../../migrations/schema.sql");

/// True when the database file is absent or zero bytes long.
pub fn needs_schema(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.len() == 0)
        .unwrap_or(true)
}

pub fn init_schema(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    conn.batch_execute(SCHEMA_SQL)?;
    Ok(())
}

/// One-time startup step run before the server binds: creates the parent
/// directory and, if the file is missing or empty, the `posts` table.
///
/// Returns whether the schema was written.
pub fn prepare_storage(config: &DatabaseConfig) -> Result<bool, StoreError> {
    let path = config.database_path.as_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if !needs_schema(path) {
        debug!(database = %path.display(), "database already initialized");
        return Ok(false);
    }

    info!(database = %path.display(), "Initializing database...");
    let mut conn = SqliteConnection::establish(&config.database_url())?;
    init_schema(&mut conn)?;
    info!("Database initialized.");

    Ok(true)
}
