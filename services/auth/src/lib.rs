//! Authentication core for the mygram application
//!
//! Password hashing, token issuance and verification, and the ownership
//! check applied before every mutation of a user-owned resource.

pub mod authorization;
pub mod error;
pub mod jwt;
pub mod password;

pub use authorization::authorize;
pub use error::{AuthError, AuthResult};
pub use jwt::{Claims, JwtConfig, JwtService, TOKEN_TTL_SECONDS};
pub use password::{hash_password, verify_password};
