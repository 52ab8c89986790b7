//! Input validation for request payloads

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{
    CommentRequest, PhotoRequest, SocialMediaRequest, UserLoginRequest, UserRegisterRequest,
};

/// Field rules checked at the HTTP boundary before a service runs
pub trait Validate {
    /// Returns the first failing rule's message
    fn validate(&self) -> Result<(), String>;
}

fn required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(message.to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    required(email, "Email is required")?;

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email address".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    required(password, "Password is required")?;

    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }

    Ok(())
}

/// Validate age
pub fn validate_age(age: i32) -> Result<(), String> {
    if age == 0 {
        return Err("Age is required".to_string());
    }

    if !(8..=99).contains(&age) {
        return Err("Age must be between 8 and 99".to_string());
    }

    Ok(())
}

impl Validate for UserRegisterRequest {
    fn validate(&self) -> Result<(), String> {
        validate_email(&self.email)?;
        required(&self.username, "Username is required")?;
        validate_password(&self.password)?;
        validate_age(self.age)
    }
}

impl Validate for UserLoginRequest {
    fn validate(&self) -> Result<(), String> {
        required(&self.username, "Username is required")?;
        required(&self.password, "Password is required")
    }
}

impl Validate for PhotoRequest {
    fn validate(&self) -> Result<(), String> {
        required(&self.title, "Title is required")?;
        required(&self.photo_url, "Photo URL is required")
    }
}

impl Validate for CommentRequest {
    fn validate(&self) -> Result<(), String> {
        required(&self.message, "Message is required")
    }
}

impl Validate for SocialMediaRequest {
    fn validate(&self) -> Result<(), String> {
        required(&self.name, "Social Media name is required")?;
        required(&self.social_media_url, "Social Media URL is required")
    }
}
