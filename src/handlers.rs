//! Authentication HTTP Handlers
//!
//! The transport boundary: deserializes requests, runs the login flow, and
//! applies the cookie directive to the outgoing response.

use crate::error::AuthError;
use crate::extractors::AuthUser;
use crate::middleware;
use crate::models::{LoginOutcome, LoginRequest, UserResponse};
use crate::service::AuthService;

use axum::{
    extract::State,
    http::header,
    middleware as axum_middleware,
    response::{AppendHeaders, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Shared auth service state
pub type AuthState = Arc<AuthService>;

// ============================================
// Route Builder
// ============================================

/// Create authentication routes
pub fn create_routes(auth_service: Arc<AuthService>) -> Router {
    // Public routes (no authentication required)
    let public = Router::new().route("/auth/login", post(login));

    // Protected routes (require a valid session cookie)
    let protected = Router::new()
        .route("/auth/me", get(get_current_user))
        .layer(axum_middleware::from_fn_with_state(
            auth_service.clone(),
            middleware::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .with_state(auth_service)
}

// ============================================
// Login
// ============================================

/// POST /auth/login
///
/// Authenticate by email/password. On success the session cookie rides on
/// the response and the body carries the public account view; on failure the
/// response is a generic 401 with no cookie.
pub async fn login(
    State(auth): State<AuthState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthError> {
    let LoginOutcome { account, cookie } = auth.login(req).await?;

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie.header_value())]),
        Json(UserResponse::from(account)),
    ))
}

// ============================================
// Current Session
// ============================================

/// GET /auth/me
///
/// Return the authenticated subject for the presented session cookie
pub async fn get_current_user(user: AuthUser) -> Result<impl IntoResponse, AuthError> {
    Ok(Json(serde_json::json!({
        "user": {
            "id": user.id
        }
    })))
}
