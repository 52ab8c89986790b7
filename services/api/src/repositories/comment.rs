//! Comment repository for database operations

use async_trait::async_trait;
use common::error::DatabaseResult;
use sqlx::PgPool;

use super::CommentRepository;
use crate::models::Comment;

/// PostgreSQL comment repository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new comment repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn find_all(&self) -> DatabaseResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, user_id, photo_id, message, created_at, updated_at
            FROM comments
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, user_id, photo_id, message, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn find_by_photo_id(&self, photo_id: &str) -> DatabaseResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, user_id, photo_id, message, created_at, updated_at
            FROM comments
            WHERE photo_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(photo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn find_by_user_id(&self, user_id: &str) -> DatabaseResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, user_id, photo_id, message, created_at, updated_at
            FROM comments
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn create(&self, comment: &Comment) -> DatabaseResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, user_id, photo_id, message, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, photo_id, message, created_at, updated_at
            "#,
        )
        .bind(&comment.id)
        .bind(&comment.user_id)
        .bind(&comment.photo_id)
        .bind(&comment.message)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn update(&self, comment: &Comment) -> DatabaseResult<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET message = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, user_id, photo_id, message, created_at, updated_at
            "#,
        )
        .bind(&comment.id)
        .bind(&comment.message)
        .bind(comment.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn delete(&self, id: &str) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
