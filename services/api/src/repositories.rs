//! Repositories for database operations
//!
//! Services only see the traits below. `main` wires the PostgreSQL
//! implementations; tests use the in-memory store.

use async_trait::async_trait;
use common::error::DatabaseResult;
use sqlx::PgPool;
use std::sync::Arc;

use crate::models::{Comment, Photo, SocialMedia, User};

pub mod comment;
pub mod memory;
pub mod photo;
pub mod social_media;
pub mod user;

pub use comment::PgCommentRepository;
pub use memory::InMemoryStore;
pub use photo::PgPhotoRepository;
pub use social_media::PgSocialMediaRepository;
pub use user::PgUserRepository;

/// Storage access for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: &User) -> DatabaseResult<User>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<User>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> DatabaseResult<Option<User>>;
}

/// Storage access for photos
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    async fn find_all(&self) -> DatabaseResult<Vec<Photo>>;

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Photo>>;

    async fn find_by_user_id(&self, user_id: &str) -> DatabaseResult<Vec<Photo>>;

    async fn create(&self, photo: &Photo) -> DatabaseResult<Photo>;

    /// Write the mutable columns (title, caption, photo_url, updated_at).
    /// `None` when the row no longer exists.
    async fn update(&self, photo: &Photo) -> DatabaseResult<Option<Photo>>;

    /// Delete a photo and every comment on it. `false` when nothing matched.
    async fn delete(&self, id: &str) -> DatabaseResult<bool>;
}

/// Storage access for comments
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_all(&self) -> DatabaseResult<Vec<Comment>>;

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Comment>>;

    async fn find_by_photo_id(&self, photo_id: &str) -> DatabaseResult<Vec<Comment>>;

    async fn find_by_user_id(&self, user_id: &str) -> DatabaseResult<Vec<Comment>>;

    async fn create(&self, comment: &Comment) -> DatabaseResult<Comment>;

    /// Write the mutable columns (message, updated_at).
    async fn update(&self, comment: &Comment) -> DatabaseResult<Option<Comment>>;

    async fn delete(&self, id: &str) -> DatabaseResult<bool>;
}

/// Storage access for social media links
#[async_trait]
pub trait SocialMediaRepository: Send + Sync {
    async fn find_all(&self) -> DatabaseResult<Vec<SocialMedia>>;

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<SocialMedia>>;

    async fn find_by_user_id(&self, user_id: &str) -> DatabaseResult<Vec<SocialMedia>>;

    async fn create(&self, social_media: &SocialMedia) -> DatabaseResult<SocialMedia>;

    /// Write the mutable columns (name, social_media_url, updated_at).
    async fn update(&self, social_media: &SocialMedia) -> DatabaseResult<Option<SocialMedia>>;

    async fn delete(&self, id: &str) -> DatabaseResult<bool>;
}

/// The full set of storage handles injected into the services
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub photos: Arc<dyn PhotoRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub social_media: Arc<dyn SocialMediaRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            photos: Arc::new(PgPhotoRepository::new(pool.clone())),
            comments: Arc::new(PgCommentRepository::new(pool.clone())),
            social_media: Arc::new(PgSocialMediaRepository::new(pool)),
        }
    }

    /// Repositories backed by one shared in-memory store
    pub fn in_memory(store: InMemoryStore) -> Self {
        Self {
            users: Arc::new(store.clone()),
            photos: Arc::new(store.clone()),
            comments: Arc::new(store.clone()),
            social_media: Arc::new(store),
        }
    }
}
