//! JWT service for token generation and validation
//!
//! Tokens are compact HS256 JWS strings signed with a shared secret. The claim
//! set is deliberately small: the subject user id and an absolute expiry.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::error::{AuthError, AuthResult};

/// Lifetime of an issued token in seconds (1 hour)
pub const TOKEN_TTL_SECONDS: u64 = 3600;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Symmetric secret used to sign and verify tokens
    pub secret: String,
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SECRET_KEY`: HMAC secret for signing tokens (required, non-empty)
    pub fn from_env() -> AuthResult<Self> {
        let secret = std::env::var("SECRET_KEY").map_err(|_| {
            AuthError::Configuration("SECRET_KEY environment variable not set".to_string())
        })?;

        if secret.is_empty() {
            return Err(AuthError::Configuration(
                "SECRET_KEY must not be empty".to_string(),
            ));
        }

        Ok(JwtConfig { secret })
    }
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user ID
    pub user_id: String,
    /// Expiration time (unix seconds)
    pub exp: u64,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // Only HS256 is accepted; a token claiming any other alg is rejected.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        JwtService {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a token for a user, valid for [`TOKEN_TTL_SECONDS`]
    pub fn issue(&self, user_id: &str) -> AuthResult<String> {
        let claims = Claims {
            user_id: user_id.to_string(),
            exp: now()? + TOKEN_TTL_SECONDS,
        };

        self.sign(&claims)
    }

    /// Validate a token and return its claims
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                debug!("Rejected token: {}", e);
                AuthError::InvalidToken
            })?;

        Ok(token_data.claims)
    }

    fn sign(&self, claims: &Claims) -> AuthResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Configuration(format!("Failed to sign token: {}", e)))
    }
}

fn now() -> AuthResult<u64> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AuthError::Configuration(format!("Failed to get current time: {}", e)))?
        .as_secs();

    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn service(secret: &str) -> JwtService {
        JwtService::new(JwtConfig {
            secret: secret.to_string(),
        })
    }

    #[test]
    fn test_issue_then_verify_returns_subject() {
        let jwt = service("test-secret");
        let token = jwt.issue("3f1c2a9e-user").unwrap();

        let claims = jwt.verify(&token).unwrap();
        assert_eq!(claims.user_id, "3f1c2a9e-user");

        let now = now().unwrap();
        assert!(claims.exp > now);
        assert!(claims.exp <= now + TOKEN_TTL_SECONDS);
    }

    #[test]
    fn test_token_is_three_part_compact_form() {
        let token = service("test-secret").issue("user").unwrap();

        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let jwt = service("test-secret");
        let token = jwt
            .sign(&Claims {
                user_id: "user".to_string(),
                exp: now().unwrap() - 10,
            })
            .unwrap();

        assert_eq!(jwt.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_token_from_other_key_is_rejected() {
        let token = service("other-secret").issue("user").unwrap();

        assert_eq!(
            service("test-secret").verify(&token),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_token_with_other_algorithm_is_rejected() {
        let claims = Claims {
            user_id: "user".to_string(),
            exp: now().unwrap() + TOKEN_TTL_SECONDS,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(
            service("test-secret").verify(&token),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let jwt = service("test-secret");

        assert_eq!(jwt.verify(""), Err(AuthError::InvalidToken));
        assert_eq!(jwt.verify("not.a.jwt"), Err(AuthError::InvalidToken));
    }

    #[test]
    #[serial]
    fn test_jwt_config_from_env() {
        unsafe {
            std::env::set_var("SECRET_KEY", "from-env");
        }

        let config = JwtConfig::from_env().unwrap();
        assert_eq!(config.secret, "from-env");

        unsafe {
            std::env::remove_var("SECRET_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_jwt_config_requires_secret() {
        unsafe {
            std::env::remove_var("SECRET_KEY");
        }
        assert!(matches!(
            JwtConfig::from_env(),
            Err(AuthError::Configuration(_))
        ));

        unsafe {
            std::env::set_var("SECRET_KEY", "");
        }
        assert!(matches!(
            JwtConfig::from_env(),
            Err(AuthError::Configuration(_))
        ));

        unsafe {
            std::env::remove_var("SECRET_KEY");
        }
    }
}
