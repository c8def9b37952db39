//! Authentication Middleware
//!
//! Session token validation for authenticated routes. The token travels in
//! the session cookie, never in an Authorization header.

use crate::cookie;
use crate::handlers::AuthState;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

/// Require an authenticated session.
///
/// Validates the session token from the `Authentication` cookie and stores
/// the claims in request extensions for use by extractors.
pub async fn require_auth(
    State(auth): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = req
        .headers()
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(cookie::token_from_cookie_header);

    let token = token.ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "unauthorized",
                "message": "Authentication required"
            })),
        )
            .into_response()
    })?;

    let claims = auth
        .validate_session_token(token)
        .map_err(|e| e.into_response())?;

    // Store claims in request extensions for extractors
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
