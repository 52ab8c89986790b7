//! Social media handlers

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
    models::{DeleteResponse, SocialMediaRequest},
    state::AppState,
    validation::Validate,
};

pub async fn list(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let items = state.social_media_service.get_all().await?;
    Ok(respond(StatusCode::OK, items))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let item = state.social_media_service.get_by_id(&id).await?;
    Ok(respond(StatusCode::OK, item))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    WithRejection(Json(payload), _): JsonBody<SocialMediaRequest>,
) -> ApiResult<impl IntoResponse> {
    payload.validate().map_err(ApiError::Validation)?;

    let item = state.social_media_service.add(payload, &user.id).await?;
    Ok(respond(StatusCode::CREATED, item))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): JsonBody<SocialMediaRequest>,
) -> ApiResult<impl IntoResponse> {
    payload.validate().map_err(ApiError::Validation)?;

    let item = state
        .social_media_service
        .update_by_id(payload, &id, &user.id)
        .await?;
    Ok(respond(StatusCode::OK, item))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.social_media_service.delete_by_id(&id, &user.id).await?;

    Ok(respond(
        StatusCode::OK,
        DeleteResponse {
            message: "Success delete Social Media!".to_string(),
        },
    ))
}
