//! Resource services
//!
//! Each service orchestrates hashing, tokens and the ownership check around
//! its repositories. Every Update/Delete looks the target up first, then
//! checks ownership, then mutates.

pub mod comment;
pub mod photo;
pub mod social_media;
pub mod user;

pub use comment::CommentService;
pub use photo::PhotoService;
pub use social_media::SocialMediaService;
pub use user::UserService;

/// Fresh identifier for a new entity
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
