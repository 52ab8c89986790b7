//! Response envelopes shared by every endpoint

use axum::http::StatusCode;
use serde::Serialize;

/// Status block carried by every response
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub code: u16,
    pub message: String,
}

impl Meta {
    pub fn new(status: StatusCode) -> Self {
        Self {
            code: status.as_u16(),
            message: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

/// Successful response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ResponseSuccess<T> {
    pub meta: Meta,
    pub data: T,
}

impl<T> ResponseSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            meta: Meta::new(status),
            data,
        }
    }
}

/// Failed response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFailed {
    pub meta: Meta,
    pub error: String,
}

/// Payload for successful deletes
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
