//! Users API handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cm_contracts::users::{LoginUser, RegisterUser, UpdateUser};

use crate::error::ApiResult;
use crate::extractors::{ApiJson, AppState, AuthenticatedUser};
use crate::representers::{Data, LoginResource, UserResource};

/// Register a new user
///
/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterUser>,
) -> ApiResult<impl IntoResponse> {
    let user = state.services.users.register(body).await?;
    Ok((StatusCode::CREATED, Json(Data::new(UserResource::from(user)))))
}

/// Exchange credentials for a session token
///
/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginUser>,
) -> ApiResult<impl IntoResponse> {
    let user = state.services.users.login(body).await?;
    Ok(Json(Data::new(LoginResource::from(user))))
}

/// GET /api/users/current
pub async fn current(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    let user = state.services.users.current(&user).await?;
    Ok(Json(Data::new(UserResource::from(user))))
}

/// PATCH /api/users/current
pub async fn update_current(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiJson(body): ApiJson<UpdateUser>,
) -> ApiResult<impl IntoResponse> {
    let user = state.services.users.update(&user, body).await?;
    Ok(Json(Data::new(UserResource::from(user))))
}

/// Invalidate the caller's token
///
/// DELETE /api/users/logout
pub async fn logout(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<impl IntoResponse> {
    let done = state.services.users.logout(&user).await?;
    Ok(Json(Data::new(done)))
}
