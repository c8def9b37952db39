//! Authentication Extractors
//!
//! Axum extractors exposing the authenticated identity to handlers.

use crate::models::SessionClaims;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

/// Authenticated account identity extracted from validated session claims
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
}

impl AuthUser {
    /// Create user identity from session claims
    pub fn from_claims(claims: &SessionClaims) -> Self {
        Self { id: claims.sub }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Claims are placed in extensions by the require_auth middleware
        if let Some(claims) = parts.extensions.get::<SessionClaims>() {
            return Ok(AuthUser::from_claims(claims));
        }

        Err((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "unauthorized",
                "message": "Authentication required"
            })),
        )
            .into_response())
    }
}
