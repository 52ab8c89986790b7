//! User model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{CommentResponse, PhotoResponse, SocialMediaResponse};

/// User entity
///
/// Never serialized to clients; responses are built from it instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for user registration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserRegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub age: i32,
}

/// Response for user registration
#[derive(Debug, Clone, Serialize)]
pub struct UserRegisterResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserRegisterResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            age: user.age,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request for user login
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserLoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for user login
#[derive(Debug, Clone, Serialize)]
pub struct UserLoginResponse {
    pub token: String,
}

/// A user together with everything they own
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub age: i32,
    pub photos: Vec<PhotoResponse>,
    pub comments: Vec<CommentResponse>,
    pub social_medias: Vec<SocialMediaResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
