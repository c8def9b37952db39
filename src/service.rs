//! Authentication Service
//!
//! Core authentication logic: credential verification against the user
//! directory, session token signing, and cookie issuance.

use crate::config::AuthConfig;
use crate::cookie::SessionCookie;
use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::models::{Account, LoginOutcome, LoginRequest, SessionClaims};
use crate::password;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;

// ============================================
// Credential Verification
// ============================================

/// Checks a login identifier and secret against the user directory.
///
/// Stateless apart from the injected directory; safe to share across
/// concurrent requests.
pub struct CredentialVerifier {
    directory: Arc<dyn UserDirectory>,
}

impl CredentialVerifier {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Verify credentials and return the matching account.
    ///
    /// Every failure - unknown identifier, wrong password, or any fault in
    /// the directory or hashing layer - collapses to
    /// [`AuthError::InvalidCredentials`] here, and nothing below this
    /// boundary leaks upward. The collapse is deliberately silent.
    pub async fn verify(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        match self.lookup_and_check(email, password).await {
            Ok(account) => Ok(account),
            Err(_) => Err(AuthError::InvalidCredentials),
        }
    }

    async fn lookup_and_check(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        let account = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(account)
    }
}

// ============================================
// Session Issuance
// ============================================

/// Signs session tokens and builds the cookie descriptor for verified
/// accounts.
pub struct SessionIssuer {
    token_lifetime_ms: i64,
    secure_cookies: bool,
    encoding_key: EncodingKey,
}

impl SessionIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            token_lifetime_ms: config.token_lifetime_ms,
            secure_cookies: config.environment.is_production(),
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Issue a session cookie for a verified account.
    ///
    /// The lifetime is re-checked so a bad configuration can never produce a
    /// cookie with an undefined expiry. No retries: issuance either succeeds
    /// deterministically or fails on configuration error.
    pub fn issue(&self, account: &Account) -> Result<SessionCookie, AuthError> {
        if self.token_lifetime_ms <= 0 {
            return Err(AuthError::Config(
                "session lifetime must be a positive number of milliseconds".to_string(),
            ));
        }

        let now = Utc::now();
        let expires_at = now + Duration::milliseconds(self.token_lifetime_ms);

        let claims = SessionClaims {
            sub: account.id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::Internal)?;

        Ok(SessionCookie {
            token,
            secure: self.secure_cookies,
            expires_at,
        })
    }
}

// ============================================
// Authentication Facade
// ============================================

/// Authentication service composing verification and issuance.
///
/// Each request runs independently: no shared mutable state, no server-side
/// session store, so abandonment mid-flow commits nothing.
pub struct AuthService {
    verifier: CredentialVerifier,
    issuer: SessionIssuer,
    decoding_key: DecodingKey,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(directory: Arc<dyn UserDirectory>, config: AuthConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        Self {
            verifier: CredentialVerifier::new(directory),
            issuer: SessionIssuer::new(&config),
            decoding_key,
        }
    }

    /// Attempt to login a user.
    ///
    /// On success returns the verified account together with the cookie
    /// directive for the transport layer to attach; on failure no cookie
    /// exists anywhere.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginOutcome, AuthError> {
        let account = self.verifier.verify(&req.email, &req.password).await?;
        let cookie = self.issuer.issue(&account)?;

        tracing::info!(account_id = %account.id, "session issued");

        Ok(LoginOutcome { account, cookie })
    }

    /// Validate a session token from an authenticated request
    pub fn validate_session_token(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::directory::MemoryDirectory;
    use crate::password::hash_password;
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            token_lifetime_ms: 3_600_000,
            environment: Environment::Development,
        }
    }

    fn account(email: &str, password: &str) -> Account {
        let now = Utc::now();
        Account {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            name: "Test User".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    async fn service_with(accounts: Vec<Account>) -> AuthService {
        let directory = MemoryDirectory::new();
        for account in accounts {
            directory.insert(account).await;
        }
        AuthService::new(Arc::new(directory), test_config())
    }

    #[tokio::test]
    async fn test_verify_returns_account_for_correct_password() {
        let account = account("u1@x.com", "correctpw");
        let id = account.id;
        let service = service_with(vec![account]).await;

        let verified = service
            .verifier
            .verify("u1@x.com", "correctpw")
            .await
            .unwrap();

        assert_eq!(verified.id, id);
    }

    #[tokio::test]
    async fn test_failure_causes_are_indistinguishable() {
        let service = service_with(vec![account("u1@x.com", "correctpw")]).await;

        let wrong_password = service.verifier.verify("u1@x.com", "wrongpw").await;
        let unknown_user = service.verifier.verify("ghost@x.com", "anything").await;
        let empty = service.verifier.verify("", "").await;

        for result in [wrong_password, unknown_user, empty] {
            let err = result.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert_eq!(err.to_string(), "Invalid credentials");
        }
    }

    #[tokio::test]
    async fn test_malformed_stored_hash_collapses_to_invalid_credentials() {
        let mut broken = account("u1@x.com", "correctpw");
        broken.password_hash = "not-a-phc-string".to_string();
        let service = service_with(vec![broken]).await;

        let err = service
            .verifier
            .verify("u1@x.com", "correctpw")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_issue_builds_claims_for_account() {
        let account = account("u1@x.com", "correctpw");
        let service = service_with(vec![account.clone()]).await;

        let before = Utc::now();
        let cookie = service.issuer.issue(&account).unwrap();
        let after = Utc::now();

        let claims = service.validate_session_token(&cookie.token).unwrap();
        assert_eq!(claims.sub, account.id);
        assert_eq!(claims.exp, cookie.expires_at.timestamp());

        // expiry lands at issuance time + configured lifetime
        let lifetime = Duration::milliseconds(3_600_000);
        assert!(cookie.expires_at >= before + lifetime);
        assert!(cookie.expires_at <= after + lifetime);
        assert!(!cookie.secure);
    }

    #[tokio::test]
    async fn test_issue_fails_fast_on_bad_lifetime() {
        let account = account("u1@x.com", "correctpw");
        let issuer = SessionIssuer::new(&AuthConfig {
            token_lifetime_ms: 0,
            ..test_config()
        });

        let err = issuer.issue(&account).unwrap_err();

        assert!(matches!(err, AuthError::Config(_)));
    }

    #[tokio::test]
    async fn test_login_with_bad_lifetime_fails_before_any_cookie() {
        let account = account("u1@x.com", "correctpw");
        let directory = MemoryDirectory::new();
        directory.insert(account).await;
        let service = AuthService::new(
            Arc::new(directory),
            AuthConfig {
                token_lifetime_ms: 0,
                ..test_config()
            },
        );

        // credentials are fine; the configuration fault alone rejects the login
        let err = service
            .login(LoginRequest {
                email: "u1@x.com".to_string(),
                password: "correctpw".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Config(_)));
    }

    #[tokio::test]
    async fn test_secure_flag_follows_environment() {
        let account = account("u1@x.com", "correctpw");
        let issuer = SessionIssuer::new(&AuthConfig {
            environment: Environment::Production,
            ..test_config()
        });

        assert!(issuer.issue(&account).unwrap().secure);
    }

    #[tokio::test]
    async fn test_validate_rejects_tampered_token() {
        let account = account("u1@x.com", "correctpw");
        let service = service_with(vec![account.clone()]).await;

        let cookie = service.issuer.issue(&account).unwrap();
        let mut tampered = cookie.token.clone();
        tampered.push('x');

        assert!(matches!(
            service.validate_session_token(&tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn test_login_returns_account_and_cookie() {
        let account = account("u1@x.com", "correctpw");
        let id = account.id;
        let service = service_with(vec![account]).await;

        let outcome = service
            .login(LoginRequest {
                email: "u1@x.com".to_string(),
                password: "correctpw".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.account.id, id);
        let claims = service.validate_session_token(&outcome.cookie.token).unwrap();
        assert_eq!(claims.sub, id);
    }
}
