//! Comment model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Comment entity
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub photo_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create and update payload for comments
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommentRequest {
    pub message: String,
}

/// Response for a single comment
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub photo_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            photo_id: comment.photo_id,
            message: comment.message,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Comment as embedded in a photo response
#[derive(Debug, Clone, Serialize)]
pub struct CommentInPhotoResponse {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentInPhotoResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            message: comment.message,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
