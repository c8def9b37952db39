//! User Directory Collaborator
//!
//! The authentication flow never owns account storage; it reads records
//! through this seam. Production deployments wire in [`PgUserDirectory`];
//! tests and local development use [`MemoryDirectory`].

use crate::models::Account;

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Errors surfaced by a directory implementation.
///
/// On the login path these never reach the caller; the verification boundary
/// collapses them into the generic credentials failure.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    #[error("malformed account record: {0}")]
    Malformed(String),
}

/// Lookup interface required from the user directory
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch at most one account by its login identifier
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DirectoryError>;
}

// ============================================
// Postgres Directory
// ============================================

/// Postgres-backed user directory
pub struct PgUserDirectory {
    db: PgPool,
}

impl PgUserDirectory {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DirectoryError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, email, password_hash, name, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                DirectoryError::Malformed(e.to_string())
            }
            other => DirectoryError::Unavailable(other.to_string()),
        })?;

        Ok(account)
    }
}

// ============================================
// In-Memory Directory
// ============================================

/// In-memory user directory for tests and local development
#[derive(Default)]
pub struct MemoryDirectory {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an account, keyed by its email
    pub async fn insert(&self, account: Account) {
        self.accounts
            .write()
            .await
            .insert(account.email.clone(), account);
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DirectoryError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }
}
