use std::sync::Arc;

use axum::{ extract::{ FromRequestParts, Path }, http::request::Parts, response::Response };

use crate::{ handlers::general_handlers::not_found_page, AppState };

/// The `{id}` segment of the post routes.
///
/// Any integer is accepted. A run of digits too large for `i64` cannot name a
/// stored post and comes through as `PostId(None)`, which the handlers turn
/// into the usual not-found redirect. Anything that is not a number is not a
/// post route at all and gets the 404 page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(pub Option<i64>);

impl PostId {
    pub fn parse(segment: &str) -> Option<Self> {
        if let Ok(id) = segment.parse::<i64>() {
            return Some(Self(Some(id)));
        }

        let digits = segment.strip_prefix('-').unwrap_or(segment);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(None))
        } else {
            None
        }
    }
}

impl FromRequestParts<Arc<AppState>> for PostId {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>
    ) -> Result<Self, Self::Rejection> {
        let Path(segment): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found_page(state))?;

        PostId::parse(&segment).ok_or_else(|| not_found_page(state))
    }
}
