//! Session Cookie Wire Format
//!
//! The cookie is the session state: its value is the signed token and its
//! attributes are the issuance policy. Rendering and parsing of the
//! `Set-Cookie`/`Cookie` headers live here so the rest of the crate never
//! touches header syntax.

use chrono::{DateTime, Utc};

/// Name of the session cookie
pub const AUTH_COOKIE_NAME: &str = "Authentication";

/// Session cookie descriptor produced by a successful login.
///
/// `HttpOnly` and `SameSite=Strict` are unconditional; `secure` follows the
/// deployment environment so non-TLS development still works.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    /// Signed session token
    pub token: String,
    /// Whether the `Secure` attribute is set
    pub secure: bool,
    /// Absolute expiry, also encoded in the token itself
    pub expires_at: DateTime<Utc>,
}

impl SessionCookie {
    /// Render the `Set-Cookie` header value
    pub fn header_value(&self) -> String {
        let secure = if self.secure { "Secure; " } else { "" };
        format!(
            "{}={}; HttpOnly; {}SameSite=Strict; Path=/; Expires={}",
            AUTH_COOKIE_NAME,
            self.token,
            secure,
            // IMF-fixdate, the only Expires format every browser accepts
            self.expires_at.format("%a, %d %b %Y %H:%M:%S GMT"),
        )
    }
}

/// Extract the session token from a `Cookie` request header
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(AUTH_COOKIE_NAME)?.strip_prefix('='))
        .filter(|token| !token.is_empty())
}
