//! Social media use cases

use auth::authorize;
use chrono::Utc;
use std::sync::Arc;

use super::generate_id;
use crate::{
    error::{ApiError, ApiResult},
    models::{SocialMedia, SocialMediaRequest, SocialMediaResponse},
    repositories::{Repositories, SocialMediaRepository},
};

/// Social media service
#[derive(Clone)]
pub struct SocialMediaService {
    social_media: Arc<dyn SocialMediaRepository>,
}

impl SocialMediaService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            social_media: repositories.social_media.clone(),
        }
    }

    pub async fn get_all(&self) -> ApiResult<Vec<SocialMediaResponse>> {
        let items = self.social_media.find_all().await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<SocialMediaResponse> {
        let item = self
            .social_media
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;

        Ok(item.into())
    }

    pub async fn add(
        &self,
        request: SocialMediaRequest,
        user_id: &str,
    ) -> ApiResult<SocialMediaResponse> {
        let now = Utc::now();
        let item = SocialMedia {
            id: generate_id(),
            name: request.name,
            social_media_url: request.social_media_url,
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        };

        Ok(self.social_media.create(&item).await?.into())
    }

    pub async fn update_by_id(
        &self,
        request: SocialMediaRequest,
        id: &str,
        user_id: &str,
    ) -> ApiResult<SocialMediaResponse> {
        let existing = self
            .social_media
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        authorize(&existing.user_id, user_id)?;

        let changed = SocialMedia {
            name: request.name,
            social_media_url: request.social_media_url,
            updated_at: Utc::now(),
            ..existing
        };

        let item = self
            .social_media
            .update(&changed)
            .await?
            .ok_or(ApiError::NotFound)?;

        Ok(item.into())
    }

    pub async fn delete_by_id(&self, id: &str, user_id: &str) -> ApiResult<()> {
        let existing = self
            .social_media
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        authorize(&existing.user_id, user_id)?;

        if !self.social_media.delete(id).await? {
            return Err(ApiError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryStore;

    fn setup() -> SocialMediaService {
        SocialMediaService::new(&Repositories::in_memory(InMemoryStore::new()))
    }

    fn github(url: &str) -> SocialMediaRequest {
        SocialMediaRequest {
            name: "github".to_string(),
            social_media_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_crud_round() {
        let service = setup();

        let created = service
            .add(github("https://github.com/adi"), "user-a")
            .await
            .unwrap();
        assert_eq!(created.user_id, "user-a");

        let updated = service
            .update_by_id(github("https://github.com/adi-w"), &created.id, "user-a")
            .await
            .unwrap();
        assert_eq!(updated.social_media_url, "https://github.com/adi-w");
        assert_eq!(updated.created_at, created.created_at);

        assert_eq!(service.get_all().await.unwrap().len(), 1);

        service.delete_by_id(&created.id, "user-a").await.unwrap();
        assert!(matches!(
            service.get_by_id(&created.id).await,
            Err(ApiError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_non_owner_is_forbidden_regardless_of_payload() {
        let service = setup();
        let created = service
            .add(github("https://github.com/adi"), "user-a")
            .await
            .unwrap();

        let update = service
            .update_by_id(github(""), &created.id, "user-b")
            .await;
        assert!(matches!(update, Err(ApiError::ForbiddenAccess)));

        let delete = service.delete_by_id(&created.id, "user-b").await;
        assert!(matches!(delete, Err(ApiError::ForbiddenAccess)));
    }

    #[tokio::test]
    async fn test_missing_target_is_not_found() {
        let service = setup();

        let update = service
            .update_by_id(github("https://x"), "missing", "user-a")
            .await;
        assert!(matches!(update, Err(ApiError::NotFound)));
    }
}
