//! Application state shared across handlers

use auth::JwtService;

use crate::{
    repositories::Repositories,
    services::{CommentService, PhotoService, SocialMediaService, UserService},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub jwt_service: JwtService,
    pub user_service: UserService,
    pub photo_service: PhotoService,
    pub comment_service: CommentService,
    pub social_media_service: SocialMediaService,
}

impl AppState {
    /// Wire every service onto the given storage
    pub fn new(repositories: Repositories, jwt_service: JwtService) -> Self {
        Self {
            user_service: UserService::new(&repositories, jwt_service.clone()),
            photo_service: PhotoService::new(&repositories),
            comment_service: CommentService::new(&repositories),
            social_media_service: SocialMediaService::new(&repositories),
            jwt_service,
        }
    }
}
