use std::{ convert::Infallible, sync::Arc };

use axum::{ extract::FromRequestParts, http::request::Parts };
use diesel::{ prelude::*, SqliteConnection };
use tracing::debug;

use crate::{ database::StoreError, AppState };

/// The database handle owned by a single request.
///
/// Nothing is opened until the first [`acquire`](Self::acquire); later calls
/// return the same connection. The connection is closed by [`release`](Self::release),
/// which also runs on drop, so it is closed exactly once when the request ends
/// whether the handler succeeded, returned an error or panicked.
pub struct RequestConnection {
    database_url: String,
    conn: Option<SqliteConnection>,
}

impl RequestConnection {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            conn: None,
        }
    }

    pub fn acquire(&mut self) -> Result<&mut SqliteConnection, StoreError> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                debug!(database = %self.database_url, "opening request connection");
                SqliteConnection::establish(&self.database_url)?
            }
        };

        Ok(self.conn.insert(conn))
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    pub fn release(&mut self) {
        if self.conn.take().is_some() {
            debug!(database = %self.database_url, "closed request connection");
        }
    }
}

impl Drop for RequestConnection {
    fn drop(&mut self) {
        self.release();
    }
}

impl FromRequestParts<Arc<AppState>> for RequestConnection {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::new(state.config.database.database_url()))
    }
}
