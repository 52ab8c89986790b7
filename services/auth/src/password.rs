//! Password hashing and verification
//!
//! Passwords are hashed with Argon2id using the library defaults, which keeps
//! the work factor fixed for every stored digest. Digests are PHC strings, so
//! the salt and parameters travel with the hash.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};

use crate::error::{AuthError, AuthResult};

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hashing(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against a stored digest
///
/// A mismatch is `Ok(false)`. Only an unreadable digest is an error.
pub fn verify_password(password: &str, password_hash: &str) -> AuthResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| AuthError::Hashing(format!("Failed to parse password hash: {}", e)))?;

    let argon2 = Argon2::default();
    let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

    Ok(result.is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_differs_from_plaintext_and_verifies() {
        let hash = hash_password("secret1").unwrap();

        assert_ne!(hash, "secret1");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("secret1", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let hash = hash_password("secret1").unwrap();

        assert_eq!(verify_password("secret2", &hash), Ok(false));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("secret1", &first).unwrap());
        assert!(verify_password("secret1", &second).unwrap());
    }

    #[test]
    fn test_unparsable_digest_is_an_error() {
        let result = verify_password("secret1", "not-a-phc-string");

        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }
}
