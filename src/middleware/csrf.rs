//! Form-submission integrity token.
//!
//! A fresh random token rides in a private (encrypted) cookie and as a
//! hidden field on the rendered form; a submission is accepted only when
//! the two agree. The comparison is constant-time.

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use subtle::ConstantTimeEq;

pub const CSRF_COOKIE: &str = "cafe_csrf";

/// Mint a token, store it in the jar, and return it for embedding as the
/// hidden form field.
pub fn issue(jar: PrivateCookieJar) -> (PrivateCookieJar, String) {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    let token = URL_SAFE_NO_PAD.encode(bytes);

    let cookie = Cookie::build((CSRF_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .build();
    (jar.add(cookie), token)
}

/// Check a submitted token against the cookie. Missing cookie or any
/// mismatch is a refusal.
pub fn verify(jar: &PrivateCookieJar, submitted: &str) -> bool {
    let Some(cookie) = jar.get(CSRF_COOKIE) else {
        return false;
    };
    cookie.value().as_bytes().ct_eq(submitted.as_bytes()).into()
}
