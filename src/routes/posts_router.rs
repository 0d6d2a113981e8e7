use std::sync::Arc;
use axum::{ routing::{ get, post }, Router };
use crate::{ AppState, handlers::post_handlers::* };

// POST ROUTER
pub fn post_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/create", get(create_form).post(create_post))
        .route("/{id}/edit", get(edit_form).post(edit_post))
        .route("/{id}/delete", post(delete_post))
}
