//! Comment handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;

use super::{JsonBody, respond};
use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::{CommentRequest, DeleteResponse},
    state::AppState,
    validation::Validate,
};

pub async fn list(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let comments = state.comment_service.get_all().await?;
    Ok(respond(StatusCode::OK, comments))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let comment = state.comment_service.get_by_id(&id).await?;
    Ok(respond(StatusCode::OK, comment))
}

/// Comment on the photo named in the path
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(photo_id): Path<String>,
    WithRejection(Json(payload), _): JsonBody<CommentRequest>,
) -> ApiResult<impl IntoResponse> {
    payload.validate().map_err(ApiError::Validation)?;

    let comment = state
        .comment_service
        .add(payload, &user.id, &photo_id)
        .await?;
    Ok(respond(StatusCode::CREATED, comment))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): JsonBody<CommentRequest>,
) -> ApiResult<impl IntoResponse> {
    payload.validate().map_err(ApiError::Validation)?;

    let comment = state
        .comment_service
        .update_by_id(payload, &id, &user.id)
        .await?;
    Ok(respond(StatusCode::OK, comment))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.comment_service.delete_by_id(&id, &user.id).await?;

    Ok(respond(
        StatusCode::OK,
        DeleteResponse {
            message: "Success delete Comment!".to_string(),
        },
    ))
}
