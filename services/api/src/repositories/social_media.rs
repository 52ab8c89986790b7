//! Social media repository for database operations

use async_trait::async_trait;
use common::error::DatabaseResult;
use sqlx::PgPool;

use super::SocialMediaRepository;
use crate::models::SocialMedia;

/// PostgreSQL social media repository
#[derive(Clone)]
pub struct PgSocialMediaRepository {
    pool: PgPool,
}

impl PgSocialMediaRepository {
    /// Create a new social media repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SocialMediaRepository for PgSocialMediaRepository {
    async fn find_all(&self) -> DatabaseResult<Vec<SocialMedia>> {
        let items = sqlx::query_as::<_, SocialMedia>(
            r#"
            SELECT id, name, social_media_url, user_id, created_at, updated_at
            FROM social_media
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<SocialMedia>> {
        let item = sqlx::query_as::<_, SocialMedia>(
            r#"
            SELECT id, name, social_media_url, user_id, created_at, updated_at
            FROM social_media
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn find_by_user_id(&self, user_id: &str) -> DatabaseResult<Vec<SocialMedia>> {
        let items = sqlx::query_as::<_, SocialMedia>(
            r#"
            SELECT id, name, social_media_url, user_id, created_at, updated_at
            FROM social_media
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn create(&self, social_media: &SocialMedia) -> DatabaseResult<SocialMedia> {
        let item = sqlx::query_as::<_, SocialMedia>(
            r#"
            INSERT INTO social_media (id, name, social_media_url, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, social_media_url, user_id, created_at, updated_at
            "#,
        )
        .bind(&social_media.id)
        .bind(&social_media.name)
        .bind(&social_media.social_media_url)
        .bind(&social_media.user_id)
        .bind(social_media.created_at)
        .bind(social_media.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn update(&self, social_media: &SocialMedia) -> DatabaseResult<Option<SocialMedia>> {
        let item = sqlx::query_as::<_, SocialMedia>(
            r#"
            UPDATE social_media
            SET name = $2, social_media_url = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, name, social_media_url, user_id, created_at, updated_at
            "#,
        )
        .bind(&social_media.id)
        .bind(&social_media.name)
        .bind(&social_media.social_media_url)
        .bind(social_media.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn delete(&self, id: &str) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM social_media WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
