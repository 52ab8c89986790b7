//! User registration, login and profile

use auth::{JwtService, hash_password, verify_password};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use super::generate_id;
use crate::{
    error::{ApiError, ApiResult},
    models::{
        User, UserLoginRequest, UserLoginResponse, UserProfileResponse, UserRegisterRequest,
        UserRegisterResponse,
    },
    repositories::{
        CommentRepository, PhotoRepository, Repositories, SocialMediaRepository, UserRepository,
    },
};

/// User service
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    photos: Arc<dyn PhotoRepository>,
    comments: Arc<dyn CommentRepository>,
    social_media: Arc<dyn SocialMediaRepository>,
    jwt_service: JwtService,
}

impl UserService {
    pub fn new(repositories: &Repositories, jwt_service: JwtService) -> Self {
        Self {
            users: repositories.users.clone(),
            photos: repositories.photos.clone(),
            comments: repositories.comments.clone(),
            social_media: repositories.social_media.clone(),
            jwt_service,
        }
    }

    /// Register a new user
    ///
    /// A taken username or email surfaces as a storage error.
    pub async fn register(&self, request: UserRegisterRequest) -> ApiResult<UserRegisterResponse> {
        info!("Registering user: {}", request.username);

        let now = Utc::now();
        let user = User {
            id: generate_id(),
            username: request.username,
            email: request.email,
            password_hash: hash_password(&request.password)?,
            age: request.age,
            created_at: now,
            updated_at: now,
        };

        let user = self.users.create(&user).await?;

        Ok(user.into())
    }

    /// Check credentials and issue a token
    pub async fn login(&self, request: UserLoginRequest) -> ApiResult<UserLoginResponse> {
        info!("Login attempt for user: {}", request.username);

        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or(ApiError::InvalidEmailOrPassword)?;

        if !verify_password(&request.password, &user.password_hash)? {
            warn!("Invalid password for user: {}", request.username);
            return Err(ApiError::InvalidEmailOrPassword);
        }

        let token = self.jwt_service.issue(&user.id)?;

        Ok(UserLoginResponse { token })
    }

    /// A user together with all their photos, comments and social media
    pub async fn profile(&self, user_id: &str) -> ApiResult<UserProfileResponse> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::NotFound)?;

        let photos = self.photos.find_by_user_id(user_id).await?;
        let comments = self.comments.find_by_user_id(user_id).await?;
        let social_medias = self.social_media.find_by_user_id(user_id).await?;

        Ok(UserProfileResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            age: user.age,
            photos: photos.into_iter().map(Into::into).collect(),
            comments: comments.into_iter().map(Into::into).collect(),
            social_medias: social_medias.into_iter().map(Into::into).collect(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
    }
}
