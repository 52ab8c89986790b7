//! Social media model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Social media link entity
#[derive(Debug, Clone, FromRow)]
pub struct SocialMedia {
    pub id: String,
    pub name: String,
    pub social_media_url: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create and update payload for social media links
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialMediaRequest {
    pub name: String,
    pub social_media_url: String,
}

/// Response for a single social media link
#[derive(Debug, Clone, Serialize)]
pub struct SocialMediaResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub social_media_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SocialMedia> for SocialMediaResponse {
    fn from(social_media: SocialMedia) -> Self {
        Self {
            id: social_media.id,
            user_id: social_media.user_id,
            name: social_media.name,
            social_media_url: social_media.social_media_url,
            created_at: social_media.created_at,
            updated_at: social_media.updated_at,
        }
    }
}
