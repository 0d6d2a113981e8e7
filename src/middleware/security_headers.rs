use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{ HeaderValue, Request },
    middleware::Next,
    response::Response,
};

use crate::AppState;

const STRICT_CSP: &str =
    "default-src 'self'; \
     script-src 'self' 'unsafe-inline'; \
     style-src 'self'; \
     img-src 'self' data:; \
     font-src 'self'; \
     object-src 'none'; \
     frame-ancestors 'none'; \
     base-uri 'self'; \
     form-action 'self'; \
     upgrade-insecure-requests";

// relaxed for local development tooling
const RELAXED_CSP: &str =
    "default-src * data: blob: 'unsafe-inline' 'unsafe-eval'; \
     script-src * data: blob: 'unsafe-inline' 'unsafe-eval'; \
     style-src * data: blob: 'unsafe-inline'; \
     img-src * data: blob:; \
     font-src * data:; \
     connect-src *; \
     frame-ancestors *";

pub async fn security_headers(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next
) -> Response {
    let mut response: Response = next.run(request).await;

    let headers = response.headers_mut();

    headers.insert("X-DNS-Prefetch-Control", HeaderValue::from_static("off"));
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("Referrer-Policy", HeaderValue::from_static("strict-origin-when-cross-origin"));

    if state.config.server.environment.is_production() {
        headers.insert(
            "Strict-Transport-Security",
            HeaderValue::from_static("max-age=15552000; includeSubDomains")
        );
        headers.insert("Content-Security-Policy", HeaderValue::from_static(STRICT_CSP));
    } else {
        headers.insert("Content-Security-Policy", HeaderValue::from_static(RELAXED_CSP));
    }

    response
}
