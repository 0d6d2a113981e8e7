use axum::{ extract::State, http::StatusCode, response::{ Html, IntoResponse, Response } };
use std::sync::Arc;
use crate::{ AppState, errors::{ HttpError, ErrorMessage }, views::Page };

/// The HTML 404 page. Pending flash messages are left alone here: a stray
/// asset request must not consume them.
pub fn not_found_page(state: &AppState) -> Response {
    let page = Page::NotFound { message: ErrorMessage::NotFound.to_string() };

    match state.templates.render(&page, &[]) {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(e) => HttpError::from(e).into_response(),
    }
}

pub async fn handler_404(State(state): State<Arc<AppState>>) -> Response {
    not_found_page(&state)
}

pub async fn health_check() -> &'static str {
    "OK"
}
