use base64::{ engine::general_purpose::URL_SAFE_NO_PAD, Engine as _ };
use cookie::SameSite;
use time::Duration;
use tower_cookies::{ CookieManagerLayer, Cookies, Cookie };
use tracing::warn;

use crate::models::Flash;

pub const FLASH_COOKIE_NAME: &str = "flash";
const FLASH_COOKIE_PATH: &str = "/";

/// Browsers drop cookies past 4096 bytes; leave room for the name and attributes.
pub const MAX_FLASH_VALUE_BYTES: usize = 3800;

/// Expose cookie middleware layer
pub fn cookie_layer() -> CookieManagerLayer {
    CookieManagerLayer::new()
}

pub struct FlashCookieOptions {
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
}

impl Default for FlashCookieOptions {
    fn default() -> Self {
        Self {
            http_only: true,
            secure: false,
            same_site: SameSite::Lax,
        }
    }
}

/// JSON, then unpadded URL-safe base64 so the value is a legal cookie octet string.
pub fn encode_flashes(flashes: &[Flash]) -> Option<String> {
    match serde_json::to_vec(flashes) {
        Ok(json) => Some(URL_SAFE_NO_PAD.encode(json)),
        Err(e) => {
            warn!(error = %e, "failed to encode flash messages");
            None
        }
    }
}

pub fn decode_flashes(value: &str) -> Vec<Flash> {
    URL_SAFE_NO_PAD.decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_else(|| {
            warn!("discarding unreadable flash cookie");
            Vec::new()
        })
}

fn pending(cookies: &Cookies) -> Vec<Flash> {
    cookies
        .get(FLASH_COOKIE_NAME)
        .map(|c| decode_flashes(c.value()))
        .unwrap_or_default()
}

/// Encode the queue, dropping the oldest messages until the value fits in a cookie.
fn encode_bounded(mut queued: Vec<Flash>) -> Option<String> {
    loop {
        let value = encode_flashes(&queued)?;
        if value.len() <= MAX_FLASH_VALUE_BYTES {
            return Some(value);
        }
        if queued.is_empty() {
            return None;
        }
        warn!("flash cookie full, dropping oldest message");
        queued.remove(0);
    }
}

/// Queue a status message for the next rendered page.
pub fn push_flash(cookies: &Cookies, flash: Flash, options: FlashCookieOptions) {
    let mut queued = pending(cookies);
    queued.push(flash);

    let Some(value) = encode_bounded(queued) else {
        return;
    };

    let mut cookie = Cookie::new(FLASH_COOKIE_NAME, value);
    cookie.set_http_only(options.http_only);
    cookie.set_secure(options.secure);
    cookie.set_same_site(options.same_site);
    cookie.set_path(FLASH_COOKIE_PATH);

    cookies.add(cookie);
}

/// Hand back every queued message and expire the cookie, so each is shown once.
pub fn take_flashes(cookies: &Cookies) -> Vec<Flash> {
    if cookies.get(FLASH_COOKIE_NAME).is_none() {
        return Vec::new();
    }

    let queued = pending(cookies);

    let mut expired = Cookie::new(FLASH_COOKIE_NAME, "");
    expired.set_path(FLASH_COOKIE_PATH);
    expired.set_max_age(Duration::seconds(0));
    cookies.add(expired);

    queued
}
