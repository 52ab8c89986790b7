//! In-memory storage backing all four repositories
//!
//! Mirrors the PostgreSQL schema constraints that matter to the services:
//! unique usernames and emails, comments referencing an existing photo, and
//! photo deletion cascading to its comments.

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{CommentRepository, PhotoRepository, SocialMediaRepository, UserRepository};
use crate::models::{Comment, Photo, SocialMedia, User};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<String, User>,
    photos: HashMap<String, Photo>,
    comments: HashMap<String, Comment>,
    social_media: HashMap<String, SocialMedia>,
}

/// Process-local store; clones share the same tables
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first, matching the SQL `ORDER BY created_at DESC`.
fn newest_first<T, F>(mut rows: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> chrono::DateTime<chrono::Utc>,
{
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &User) -> DatabaseResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.contains_key(&user.id) {
            return Err(DatabaseError::Constraint("users_pkey".to_string()));
        }
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(DatabaseError::Constraint("users_username_key".to_string()));
        }
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(DatabaseError::Constraint("users_email_key".to_string()));
        }

        tables.users.insert(user.id.clone(), user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<User>> {
        Ok(self.tables.read().await.users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DatabaseResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[async_trait]
impl PhotoRepository for InMemoryStore {
    async fn find_all(&self) -> DatabaseResult<Vec<Photo>> {
        let rows = self.tables.read().await.photos.values().cloned().collect();
        Ok(newest_first(rows, |p: &Photo| p.created_at))
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Photo>> {
        Ok(self.tables.read().await.photos.get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> DatabaseResult<Vec<Photo>> {
        let rows = self
            .tables
            .read()
            .await
            .photos
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |p: &Photo| p.created_at))
    }

    async fn create(&self, photo: &Photo) -> DatabaseResult<Photo> {
        let mut tables = self.tables.write().await;

        if tables.photos.contains_key(&photo.id) {
            return Err(DatabaseError::Constraint("photos_pkey".to_string()));
        }

        tables.photos.insert(photo.id.clone(), photo.clone());
        Ok(photo.clone())
    }

    async fn update(&self, photo: &Photo) -> DatabaseResult<Option<Photo>> {
        let mut tables = self.tables.write().await;

        Ok(tables.photos.get_mut(&photo.id).map(|stored| {
            stored.title = photo.title.clone();
            stored.caption = photo.caption.clone();
            stored.photo_url = photo.photo_url.clone();
            stored.updated_at = photo.updated_at;
            stored.clone()
        }))
    }

    async fn delete(&self, id: &str) -> DatabaseResult<bool> {
        let mut tables = self.tables.write().await;

        if tables.photos.remove(id).is_none() {
            return Ok(false);
        }
        tables.comments.retain(|_, c| c.photo_id != id);

        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_all(&self) -> DatabaseResult<Vec<Comment>> {
        let rows = self.tables.read().await.comments.values().cloned().collect();
        Ok(newest_first(rows, |c: &Comment| c.created_at))
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Comment>> {
        Ok(self.tables.read().await.comments.get(id).cloned())
    }

    async fn find_by_photo_id(&self, photo_id: &str) -> DatabaseResult<Vec<Comment>> {
        let rows = self
            .tables
            .read()
            .await
            .comments
            .values()
            .filter(|c| c.photo_id == photo_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |c: &Comment| c.created_at))
    }

    async fn find_by_user_id(&self, user_id: &str) -> DatabaseResult<Vec<Comment>> {
        let rows = self
            .tables
            .read()
            .await
            .comments
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |c: &Comment| c.created_at))
    }

    async fn create(&self, comment: &Comment) -> DatabaseResult<Comment> {
        let mut tables = self.tables.write().await;

        if !tables.photos.contains_key(&comment.photo_id) {
            return Err(DatabaseError::Constraint(
                "comments_photo_id_fkey".to_string(),
            ));
        }
        if tables.comments.contains_key(&comment.id) {
            return Err(DatabaseError::Constraint("comments_pkey".to_string()));
        }

        tables.comments.insert(comment.id.clone(), comment.clone());
        Ok(comment.clone())
    }

    async fn update(&self, comment: &Comment) -> DatabaseResult<Option<Comment>> {
        let mut tables = self.tables.write().await;

        Ok(tables.comments.get_mut(&comment.id).map(|stored| {
            stored.message = comment.message.clone();
            stored.updated_at = comment.updated_at;
            stored.clone()
        }))
    }

    async fn delete(&self, id: &str) -> DatabaseResult<bool> {
        Ok(self.tables.write().await.comments.remove(id).is_some())
    }
}

#[async_trait]
impl SocialMediaRepository for InMemoryStore {
    async fn find_all(&self) -> DatabaseResult<Vec<SocialMedia>> {
        let rows = self
            .tables
            .read()
            .await
            .social_media
            .values()
            .cloned()
            .collect();
        Ok(newest_first(rows, |s: &SocialMedia| s.created_at))
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<SocialMedia>> {
        Ok(self.tables.read().await.social_media.get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> DatabaseResult<Vec<SocialMedia>> {
        let rows = self
            .tables
            .read()
            .await
            .social_media
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |s: &SocialMedia| s.created_at))
    }

    async fn create(&self, social_media: &SocialMedia) -> DatabaseResult<SocialMedia> {
        let mut tables = self.tables.write().await;

        if tables.social_media.contains_key(&social_media.id) {
            return Err(DatabaseError::Constraint("social_media_pkey".to_string()));
        }

        tables
            .social_media
            .insert(social_media.id.clone(), social_media.clone());
        Ok(social_media.clone())
    }

    async fn update(&self, social_media: &SocialMedia) -> DatabaseResult<Option<SocialMedia>> {
        let mut tables = self.tables.write().await;

        Ok(tables.social_media.get_mut(&social_media.id).map(|stored| {
            stored.name = social_media.name.clone();
            stored.social_media_url = social_media.social_media_url.clone();
            stored.updated_at = social_media.updated_at;
            stored.clone()
        }))
    }

    async fn delete(&self, id: &str) -> DatabaseResult<bool> {
        Ok(self.tables.write().await.social_media.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: &str, username: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            age: 22,
            created_at: now,
            updated_at: now,
        }
    }

    fn photo(id: &str, user_id: &str) -> Photo {
        let now = Utc::now();
        Photo {
            id: id.to_string(),
            title: "sunset".to_string(),
            caption: String::new(),
            photo_url: "https://img.example/1.jpg".to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn comment(id: &str, photo_id: &str) -> Comment {
        let now = Utc::now();
        Comment {
            id: id.to_string(),
            user_id: "u1".to_string(),
            photo_id: photo_id.to_string(),
            message: "nice".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_username_and_email_are_unique() {
        let store: Arc<dyn UserRepository> = Arc::new(InMemoryStore::new());
        store.create(&user("1", "adi", "adi@mail.com")).await.unwrap();

        let dup_name = store.create(&user("2", "adi", "other@mail.com")).await;
        assert!(matches!(dup_name, Err(DatabaseError::Constraint(_))));

        let dup_email = store.create(&user("3", "budi", "adi@mail.com")).await;
        assert!(matches!(dup_email, Err(DatabaseError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_comment_requires_existing_photo() {
        let comments: Arc<dyn CommentRepository> = Arc::new(InMemoryStore::new());

        let result = comments.create(&comment("c1", "missing")).await;
        assert!(matches!(result, Err(DatabaseError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_photo_delete_cascades_to_comments() {
        let store = InMemoryStore::new();
        let photos: Arc<dyn PhotoRepository> = Arc::new(store.clone());
        let comments: Arc<dyn CommentRepository> = Arc::new(store);

        photos.create(&photo("p1", "u1")).await.unwrap();
        photos.create(&photo("p2", "u1")).await.unwrap();
        comments.create(&comment("c1", "p1")).await.unwrap();
        comments.create(&comment("c2", "p1")).await.unwrap();
        comments.create(&comment("c3", "p2")).await.unwrap();

        assert!(photos.delete("p1").await.unwrap());
        assert!(!photos.delete("p1").await.unwrap());

        let left = comments.find_all().await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, "c3");
    }

    #[tokio::test]
    async fn test_update_only_touches_mutable_columns() {
        let photos: Arc<dyn PhotoRepository> = Arc::new(InMemoryStore::new());
        let original = photos.create(&photo("p1", "u1")).await.unwrap();

        let mut changed = original.clone();
        changed.title = "sunrise".to_string();
        changed.user_id = "intruder".to_string();
        changed.created_at = Utc::now() + chrono::Duration::days(1);

        let stored = photos.update(&changed).await.unwrap().unwrap();
        assert_eq!(stored.title, "sunrise");
        assert_eq!(stored.user_id, "u1");
        assert_eq!(stored.created_at, original.created_at);

        let missing = photos.update(&photo("nope", "u1")).await.unwrap();
        assert!(missing.is_none());
    }
}
