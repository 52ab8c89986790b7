//! API routes

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::{
    error::{ApiError, ApiResult},
    middleware::{AuthUser, auth_middleware},
    models::{ResponseSuccess, UserLoginRequest, UserRegisterRequest},
    state::AppState,
    validation::Validate,
};

pub mod comment;
pub mod photo;
pub mod social_media;

/// JSON body whose parse failures render as a 400 envelope
pub(crate) type JsonBody<T> = WithRejection<Json<T>, ApiError>;

/// Wrap `data` in the success envelope
pub(crate) fn respond<T: Serialize>(
    status: StatusCode,
    data: T,
) -> (StatusCode, Json<ResponseSuccess<T>>) {
    (status, Json(ResponseSuccess::new(status, data)))
}

/// Create the router for the API
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/v1/auth/profile", get(profile))
        .route("/api/v1/photo", get(photo::list).post(photo::create))
        .route(
            "/api/v1/photo/:id",
            get(photo::show).put(photo::update).delete(photo::remove),
        )
        .route("/api/v1/comment", get(comment::list))
        // POST takes a photo id; the other verbs take a comment id.
        .route(
            "/api/v1/comment/:id",
            get(comment::show)
                .post(comment::create)
                .put(comment::update)
                .delete(comment::remove),
        )
        .route(
            "/api/v1/social_media",
            get(social_media::list).post(social_media::create),
        )
        .route(
            "/api/v1/social_media/:id",
            get(social_media::show)
                .put(social_media::update)
                .delete(social_media::remove),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/api/v1", get(welcome))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Welcome endpoint, doubles as a health check
pub async fn welcome() -> impl IntoResponse {
    respond(StatusCode::OK, "Welcome to mygram API")
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<UserRegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    payload.validate().map_err(ApiError::Validation)?;

    let user = state.user_service.register(payload).await?;

    Ok(respond(StatusCode::CREATED, user))
}

/// Exchange credentials for a token
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<UserLoginRequest>,
) -> ApiResult<impl IntoResponse> {
    payload.validate().map_err(ApiError::Validation)?;

    let token = state.user_service.login(payload).await?;

    Ok(respond(StatusCode::OK, token))
}

/// Profile of the token subject
pub async fn profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let profile = state.user_service.profile(&user.id).await?;

    Ok(respond(StatusCode::OK, profile))
}
