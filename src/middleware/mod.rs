pub mod cookies;
pub mod security_headers;
