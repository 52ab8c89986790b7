//! Photo handlers

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
    models::{DeleteResponse, PhotoRequest},
    state::AppState,
    validation::Validate,
};

pub async fn list(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let photos = state.photo_service.get_all().await?;
    Ok(respond(StatusCode::OK, photos))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let photo = state.photo_service.get_by_id(&id).await?;
    Ok(respond(StatusCode::OK, photo))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    WithRejection(Json(payload), _): JsonBody<PhotoRequest>,
) -> ApiResult<impl IntoResponse> {
    payload.validate().map_err(ApiError::Validation)?;

    let photo = state.photo_service.add(payload, &user.id).await?;
    Ok(respond(StatusCode::CREATED, photo))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): JsonBody<PhotoRequest>,
) -> ApiResult<impl IntoResponse> {
    payload.validate().map_err(ApiError::Validation)?;

    let photo = state
        .photo_service
        .update_by_id(payload, &id, &user.id)
        .await?;
    Ok(respond(StatusCode::OK, photo))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.photo_service.delete_by_id(&id, &user.id).await?;

    Ok(respond(
        StatusCode::OK,
        DeleteResponse {
            message: "Success delete Photo!".to_string(),
        },
    ))
}
