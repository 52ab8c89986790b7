//! Ownership authorization

use crate::error::{AuthError, AuthResult};

/// Allow the caller only if it owns the resource
///
/// Callers must look the resource up first: a missing resource is reported
/// as not found before this check ever runs.
pub fn authorize(resource_owner_id: &str, caller_id: &str) -> AuthResult<()> {
    if resource_owner_id == caller_id {
        Ok(())
    } else {
        Err(AuthError::ForbiddenAccess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_allowed() {
        assert_eq!(authorize("user-a", "user-a"), Ok(()));
    }

    #[test]
    fn test_other_caller_is_forbidden() {
        assert_eq!(
            authorize("user-a", "user-b"),
            Err(AuthError::ForbiddenAccess)
        );
    }

    #[test]
    fn test_comparison_is_exact() {
        assert!(authorize("user-a", "USER-A").is_err());
        assert!(authorize("user-a", "user-a ").is_err());
        assert!(authorize("", "user-a").is_err());
    }
}
