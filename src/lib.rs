//! Authgate
//!
//! Email/password authentication issuing stateless, cookie-carried session
//! tokens:
//! - Credential verification against an injected user directory
//! - Failure normalization: every rejection is the same generic error
//! - HS256-signed session tokens with configured expiry
//! - `HttpOnly` / `SameSite=Strict` cookie issuance, `Secure` in production
//! - Session validation middleware and extractor for authenticated routes
//!
//! Sessions are stateless: the cookie itself is the session state, there is
//! no server-side store and nothing to revoke or clean up.
//!
//! # Configuration
//!
//! All configuration is loaded from environment variables, each required:
//! - `JWT_SECRET` - Secret key for signing session tokens (min 32 chars)
//! - `JWT_EXPIRATION_MS` - Session lifetime in milliseconds (positive)
//! - `APP_ENV` - Deployment environment; `production` enables `Secure` cookies
//!
//! # Usage
//!
//! ```rust,ignore
//! use authgate::{AuthConfig, AuthService, PgUserDirectory};
//! use std::sync::Arc;
//!
//! let config = AuthConfig::from_env()?;
//! let directory = Arc::new(PgUserDirectory::new(db_pool));
//! let auth = Arc::new(AuthService::new(directory, config));
//!
//! let app = authgate::create_routes(auth);
//! ```

pub mod config;
pub mod cookie;
pub mod directory;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;

// Re-export commonly used types
pub use config::{AuthConfig, Environment};
pub use cookie::{SessionCookie, AUTH_COOKIE_NAME};
pub use directory::{DirectoryError, MemoryDirectory, PgUserDirectory, UserDirectory};
pub use error::AuthError;
pub use extractors::AuthUser;
pub use handlers::{create_routes, AuthState};
pub use models::{Account, LoginOutcome, LoginRequest, SessionClaims, UserResponse};
pub use service::{AuthService, CredentialVerifier, SessionIssuer};
