// Library entry point - the blog as a reusable router plus its building blocks

pub mod config;
pub mod database;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod views;


// Re-export commonly used types for convenience
pub use config::{ Config, ConfigError, DatabaseConfig };
pub use errors::{ HttpError, ErrorMessage };
pub use models::{ Flash, FlashLevel, Post };
pub use repositories::PostRepository;

use std::sync::Arc;
use axum::{ middleware::from_fn_with_state, Router };
use tower_http::trace::TraceLayer;

use middleware::{ cookies::cookie_layer, security_headers::security_headers };
use views::Templates;

/// Shared, read-only state. Holds no database handle: every request opens its own.
pub struct AppState {
    pub config: Config,
    pub templates: Templates,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Ok(Self {
            config,
            templates: Templates::new()?,
        })
    }
}

/// Create the complete application router with its middleware stack
pub fn create_app(state: Arc<AppState>) -> Router {
    routes
        ::create_router()
        .layer(from_fn_with_state(state.clone(), security_headers))
        .layer(cookie_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Prepare storage and build the router. Schema creation happens here, once,
/// before anything is served.
pub fn initialize_app(config: Config) -> Result<Router, ConfigError> {
    database::prepare_storage(&config.database)?;

    let state = Arc::new(AppState::new(config)?);

    Ok(create_app(state))
}
