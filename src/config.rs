//! Authentication Configuration
//!
//! All configuration values are loaded from environment variables.
//! No hardcoded secrets or sensitive data.

use crate::error::AuthError;
use std::env;

/// Deployment environment designator.
///
/// Only `production` turns on the `Secure` cookie attribute, so local
/// development over plain HTTP keeps working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Authentication configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT secret key for signing session tokens (from JWT_SECRET env var)
    pub jwt_secret: String,

    /// Session token lifetime in milliseconds (from JWT_EXPIRATION_MS env var)
    pub token_lifetime_ms: i64,

    /// Deployment environment (from APP_ENV env var)
    pub environment: Environment,
}

impl AuthConfig {
    /// Load configuration from environment variables.
    ///
    /// All three variables are required; a missing or non-numeric value is a
    /// configuration error, never a silent default.
    pub fn from_env() -> Result<Self, AuthError> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AuthError::Config("JWT_SECRET must be set".to_string()))?;

        let token_lifetime_ms = env::var("JWT_EXPIRATION_MS")
            .map_err(|_| AuthError::Config("JWT_EXPIRATION_MS must be set".to_string()))?
            .parse::<i64>()
            .map_err(|_| {
                AuthError::Config("JWT_EXPIRATION_MS must be an integer number of milliseconds".to_string())
            })?;

        let environment = env::var("APP_ENV")
            .map_err(|_| AuthError::Config("APP_ENV must be set".to_string()))
            .map(|v| {
                if v == "production" {
                    Environment::Production
                } else {
                    Environment::Development
                }
            })?;

        let config = Self {
            jwt_secret,
            token_lifetime_ms,
            environment,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.jwt_secret.len() < 32 {
            return Err(AuthError::Config(
                "JWT_SECRET must be at least 32 characters".to_string(),
            ));
        }

        if self.token_lifetime_ms <= 0 {
            return Err(AuthError::Config(
                "JWT_EXPIRATION_MS must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "a".repeat(32),
            token_lifetime_ms: 3_600_000,
            environment: Environment::Development,
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_config_validation_short_secret() {
        let config = AuthConfig {
            jwt_secret: "short".to_string(),
            ..config()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_non_positive_lifetime() {
        for lifetime in [0, -1000] {
            let config = AuthConfig {
                token_lifetime_ms: lifetime,
                ..config()
            };

            assert!(matches!(config.validate(), Err(AuthError::Config(_))));
        }
    }

    #[test]
    fn test_environment_secure_flag() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }

    // Single test so the env-var mutations stay sequential
    #[test]
    fn test_from_env_requires_lifetime() {
        env::set_var("JWT_SECRET", "a".repeat(32));
        env::set_var("APP_ENV", "production");

        env::remove_var("JWT_EXPIRATION_MS");
        assert!(matches!(AuthConfig::from_env(), Err(AuthError::Config(_))));

        env::set_var("JWT_EXPIRATION_MS", "soon");
        assert!(matches!(AuthConfig::from_env(), Err(AuthError::Config(_))));

        env::set_var("JWT_EXPIRATION_MS", "3600000");
        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.token_lifetime_ms, 3_600_000);
        assert!(config.environment.is_production());
    }
}
