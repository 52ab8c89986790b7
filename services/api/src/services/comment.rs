//! Comment use cases

use auth::authorize;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use super::generate_id;
use crate::{
    error::{ApiError, ApiResult},
    models::{Comment, CommentRequest, CommentResponse},
    repositories::{CommentRepository, PhotoRepository, Repositories},
};

/// Comment service
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    photos: Arc<dyn PhotoRepository>,
}

impl CommentService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            comments: repositories.comments.clone(),
            photos: repositories.photos.clone(),
        }
    }

    /// Comment on an existing photo
    pub async fn add(
        &self,
        request: CommentRequest,
        user_id: &str,
        photo_id: &str,
    ) -> ApiResult<CommentResponse> {
        self.photos
            .find_by_id(photo_id)
            .await?
            .ok_or(ApiError::PhotoNotFound)?;

        info!("User {} commenting on photo {}", user_id, photo_id);

        let now = Utc::now();
        let comment = Comment {
            id: generate_id(),
            user_id: user_id.to_string(),
            photo_id: photo_id.to_string(),
            message: request.message,
            created_at: now,
            updated_at: now,
        };

        Ok(self.comments.create(&comment).await?.into())
    }

    pub async fn get_all(&self) -> ApiResult<Vec<CommentResponse>> {
        let comments = self.comments.find_all().await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<CommentResponse> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;

        Ok(comment.into())
    }

    pub async fn update_by_id(
        &self,
        request: CommentRequest,
        id: &str,
        user_id: &str,
    ) -> ApiResult<CommentResponse> {
        let existing = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        authorize(&existing.user_id, user_id)?;

        let changed = Comment {
            message: request.message,
            updated_at: Utc::now(),
            ..existing
        };

        let comment = self
            .comments
            .update(&changed)
            .await?
            .ok_or(ApiError::NotFound)?;

        Ok(comment.into())
    }

    pub async fn delete_by_id(&self, id: &str, user_id: &str) -> ApiResult<()> {
        let existing = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        authorize(&existing.user_id, user_id)?;

        if !self.comments.delete(id).await? {
            return Err(ApiError::NotFound);
        }

        Ok(())
    }
}
