//! API models for storage entities, request and response payloads

pub mod comment;
pub mod photo;
pub mod response;
pub mod social_media;
pub mod user;

// Re-export for convenience
pub use comment::{Comment, CommentInPhotoResponse, CommentRequest, CommentResponse};
pub use photo::{Photo, PhotoRequest, PhotoResponse, PhotoWithCommentsResponse};
pub use response::{DeleteResponse, Meta, ResponseFailed, ResponseSuccess};
pub use social_media::{SocialMedia, SocialMediaRequest, SocialMediaResponse};
pub use user::{
    User, UserLoginRequest, UserLoginResponse, UserProfileResponse, UserRegisterRequest,
    UserRegisterResponse,
};
