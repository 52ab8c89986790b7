//! Photo repository for database operations

use async_trait::async_trait;
use common::error::DatabaseResult;
use sqlx::PgPool;

use super::PhotoRepository;
use crate::models::Photo;

/// PostgreSQL photo repository
#[derive(Clone)]
pub struct PgPhotoRepository {
    pool: PgPool,
}

impl PgPhotoRepository {
    /// Create a new photo repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for PgPhotoRepository {
    async fn find_all(&self) -> DatabaseResult<Vec<Photo>> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, title, caption, photo_url, user_id, created_at, updated_at
            FROM photos
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Photo>> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, title, caption, photo_url, user_id, created_at, updated_at
            FROM photos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(photo)
    }

    async fn find_by_user_id(&self, user_id: &str) -> DatabaseResult<Vec<Photo>> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, title, caption, photo_url, user_id, created_at, updated_at
            FROM photos
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }

    async fn create(&self, photo: &Photo) -> DatabaseResult<Photo> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            INSERT INTO photos (id, title, caption, photo_url, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, caption, photo_url, user_id, created_at, updated_at
            "#,
        )
        .bind(&photo.id)
        .bind(&photo.title)
        .bind(&photo.caption)
        .bind(&photo.photo_url)
        .bind(&photo.user_id)
        .bind(photo.created_at)
        .bind(photo.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(photo)
    }

    async fn update(&self, photo: &Photo) -> DatabaseResult<Option<Photo>> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            UPDATE photos
            SET title = $2, caption = $3, photo_url = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, title, caption, photo_url, user_id, created_at, updated_at
            "#,
        )
        .bind(&photo.id)
        .bind(&photo.title)
        .bind(&photo.caption)
        .bind(&photo.photo_url)
        .bind(photo.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(photo)
    }

    async fn delete(&self, id: &str) -> DatabaseResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comments WHERE photo_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
