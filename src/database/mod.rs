pub mod connection;
pub mod init;

use thiserror::Error;

pub use connection::RequestConnection;
pub use init::{ init_schema, prepare_storage };

/// Failures coming out of the SQLite backend. None of these are recovered;
/// they end the request with a server error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")] Connection(#[from] diesel::ConnectionError),

    #[error("Query error: {0}")] Query(#[from] diesel::result::Error),

    #[error("Storage I/O error: {0}")] Io(#[from] std::io::Error),
}
