//! Photo use cases

use auth::authorize;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::generate_id;
use crate::{
    error::{ApiError, ApiResult},
    models::{CommentInPhotoResponse, Photo, PhotoRequest, PhotoResponse, PhotoWithCommentsResponse},
    repositories::{CommentRepository, PhotoRepository, Repositories},
};

/// Photo service
#[derive(Clone)]
pub struct PhotoService {
    photos: Arc<dyn PhotoRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl PhotoService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            photos: repositories.photos.clone(),
            comments: repositories.comments.clone(),
        }
    }

    /// Every photo with its comments
    pub async fn get_all(&self) -> ApiResult<Vec<PhotoWithCommentsResponse>> {
        let photos = self.photos.find_all().await?;

        let mut by_photo: HashMap<String, Vec<CommentInPhotoResponse>> = HashMap::new();
        for comment in self.comments.find_all().await? {
            by_photo
                .entry(comment.photo_id.clone())
                .or_default()
                .push(comment.into());
        }

        Ok(photos
            .into_iter()
            .map(|photo| {
                let comments = by_photo.remove(&photo.id).unwrap_or_default();
                PhotoWithCommentsResponse {
                    photo: photo.into(),
                    comments,
                }
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<PhotoWithCommentsResponse> {
        let photo = self.photos.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
        let comments = self.comments.find_by_photo_id(id).await?;

        Ok(PhotoWithCommentsResponse {
            photo: photo.into(),
            comments: comments.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn add(&self, request: PhotoRequest, user_id: &str) -> ApiResult<PhotoResponse> {
        info!("User {} adding photo", user_id);

        let now = Utc::now();
        let photo = Photo {
            id: generate_id(),
            title: request.title,
            caption: request.caption,
            photo_url: request.photo_url,
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        };

        Ok(self.photos.create(&photo).await?.into())
    }

    pub async fn update_by_id(
        &self,
        request: PhotoRequest,
        id: &str,
        user_id: &str,
    ) -> ApiResult<PhotoResponse> {
        let existing = self.photos.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
        authorize(&existing.user_id, user_id)?;

        let changed = Photo {
            title: request.title,
            caption: request.caption,
            photo_url: request.photo_url,
            updated_at: Utc::now(),
            ..existing
        };

        let photo = self
            .photos
            .update(&changed)
            .await?
            .ok_or(ApiError::NotFound)?;

        Ok(photo.into())
    }

    /// Delete a photo and its comments
    pub async fn delete_by_id(&self, id: &str, user_id: &str) -> ApiResult<()> {
        let existing = self.photos.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
        authorize(&existing.user_id, user_id)?;

        if !self.photos.delete(id).await? {
            return Err(ApiError::NotFound);
        }

        info!("User {} deleted photo {}", user_id, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CommentRequest;
    use crate::repositories::InMemoryStore;
    use crate::services::CommentService;

    fn setup() -> (PhotoService, CommentService, Repositories) {
        let repositories = Repositories::in_memory(InMemoryStore::new());
        (
            PhotoService::new(&repositories),
            CommentService::new(&repositories),
            repositories,
        )
    }

    fn request(title: &str) -> PhotoRequest {
        PhotoRequest {
            title: title.to_string(),
            caption: "golden hour".to_string(),
            photo_url: "https://img.example/1.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_stamps_caller_as_owner() {
        let (photos, _, _) = setup();

        let photo = photos.add(request("sunset"), "user-a").await.unwrap();
        assert_eq!(photo.user_id, "user-a");
        assert_eq!(photo.created_at, photo.updated_at);

        let fetched = photos.get_by_id(&photo.id).await.unwrap();
        assert_eq!(fetched.photo.title, "sunset");
        assert!(fetched.comments.is_empty());
    }

    #[tokio::test]
    async fn test_update_by_other_user_is_forbidden() {
        let (photos, _, _) = setup();
        let photo = photos.add(request("sunset"), "user-a").await.unwrap();

        let result = photos
            .update_by_id(request("stolen"), &photo.id, "user-b")
            .await;
        assert!(matches!(result, Err(ApiError::ForbiddenAccess)));

        let unchanged = photos.get_by_id(&photo.id).await.unwrap();
        assert_eq!(unchanged.photo.title, "sunset");
    }

    #[tokio::test]
    async fn test_owner_update_keeps_identity() {
        let (photos, _, _) = setup();
        let photo = photos.add(request("sunset"), "user-a").await.unwrap();

        let updated = photos
            .update_by_id(request("sunrise"), &photo.id, "user-a")
            .await
            .unwrap();
        assert_eq!(updated.title, "sunrise");
        assert_eq!(updated.id, photo.id);
        assert_eq!(updated.user_id, "user-a");
        assert_eq!(updated.created_at, photo.created_at);
        assert!(updated.updated_at >= photo.updated_at);
    }

    #[tokio::test]
    async fn test_missing_photo_is_not_found_before_ownership() {
        let (photos, _, _) = setup();

        let update = photos.update_by_id(request("x"), "missing", "user-a").await;
        assert!(matches!(update, Err(ApiError::NotFound)));

        let delete = photos.delete_by_id("missing", "user-a").await;
        assert!(matches!(delete, Err(ApiError::NotFound)));

        let get = photos.get_by_id("missing").await;
        assert!(matches!(get, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_by_other_user_is_forbidden() {
        let (photos, _, _) = setup();
        let photo = photos.add(request("sunset"), "user-a").await.unwrap();

        let result = photos.delete_by_id(&photo.id, "user-b").await;
        assert!(matches!(result, Err(ApiError::ForbiddenAccess)));
        assert!(photos.get_by_id(&photo.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_removes_photo_and_its_comments() {
        let (photos, comments, repositories) = setup();
        let photo = photos.add(request("sunset"), "user-a").await.unwrap();
        let other = photos.add(request("beach"), "user-a").await.unwrap();

        let message = CommentRequest {
            message: "nice".to_string(),
        };
        comments.add(message.clone(), "user-b", &photo.id).await.unwrap();
        comments.add(message.clone(), "user-c", &photo.id).await.unwrap();
        comments.add(message, "user-b", &other.id).await.unwrap();

        photos.delete_by_id(&photo.id, "user-a").await.unwrap();

        assert!(repositories.photos.find_by_id(&photo.id).await.unwrap().is_none());
        assert!(
            repositories
                .comments
                .find_by_photo_id(&photo.id)
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(repositories.comments.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_all_embeds_comments_per_photo() {
        let (photos, comments, _) = setup();
        let first = photos.add(request("sunset"), "user-a").await.unwrap();
        let second = photos.add(request("beach"), "user-b").await.unwrap();

        let message = CommentRequest {
            message: "nice".to_string(),
        };
        comments.add(message.clone(), "user-b", &first.id).await.unwrap();
        comments.add(message, "user-a", &first.id).await.unwrap();

        let all = photos.get_all().await.unwrap();
        assert_eq!(all.len(), 2);

        let by_id = |id: &str| all.iter().find(|p| p.photo.id == id).unwrap();
        assert_eq!(by_id(&first.id).comments.len(), 2);
        assert!(by_id(&second.id).comments.is_empty());
    }
}
