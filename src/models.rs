//! Authentication Models
//!
//! Data structures for authentication requests, responses, account records
//! and session claims.

use crate::cookie::SessionCookie;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================
// Account Record
// ============================================

/// Account record as exposed by the user directory.
///
/// The authentication flow reads only `id` and `password_hash`; the remaining
/// fields are carried through to the caller unchanged. Never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================
// Request DTOs
// ============================================

/// Login request.
///
/// Deliberately not pre-validated: an empty or malformed email goes through
/// the same lookup-then-reject path as a wrong password, so request shape
/// leaks nothing about account existence.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================
// Response DTOs
// ============================================

/// Public account data returned to the caller (no credential material)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            created_at: account.created_at,
        }
    }
}

/// Result of a successful login: the verified account plus the cookie
/// directive the transport layer attaches to the response.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub account: Account,
    pub cookie: SessionCookie,
}

// ============================================
// JWT Claims
// ============================================

/// JWT claims for session tokens.
///
/// The subject is the only identity claim; `iat`/`exp` are the token
/// container's bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (account ID)
    pub sub: Uuid,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}
