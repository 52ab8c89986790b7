//! Photo model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::CommentInPhotoResponse;

/// Photo entity
#[derive(Debug, Clone, FromRow)]
pub struct Photo {
    pub id: String,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create and update payload for photos
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PhotoRequest {
    pub title: String,
    pub caption: String,
    pub photo_url: String,
}

/// Response for a single photo
#[derive(Debug, Clone, Serialize)]
pub struct PhotoResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            user_id: photo.user_id,
            title: photo.title,
            caption: photo.caption,
            photo_url: photo.photo_url,
            created_at: photo.created_at,
            updated_at: photo.updated_at,
        }
    }
}

/// Response for photo reads, with the comments left on it
#[derive(Debug, Clone, Serialize)]
pub struct PhotoWithCommentsResponse {
    #[serde(flatten)]
    pub photo: PhotoResponse,
    pub comments: Vec<CommentInPhotoResponse>,
}
