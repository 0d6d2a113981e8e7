use std::sync::Arc;

use axum::Router;

use crate::AppState;

pub mod general_router;
pub mod posts_router;

use general_router::general_routes;
use posts_router::post_routes;

/// Main application router assembly function
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        // blog pages
        .merge(post_routes())
        // health check and 404 fallback
        .merge(general_routes())
}
