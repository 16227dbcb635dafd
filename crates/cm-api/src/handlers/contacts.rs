//! Contacts API handlers

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cm_contracts::contacts::ContactInput;
use cm_core::traits::Id;
use cm_services::ContactSearchParams;

use crate::error::ApiResult;
use crate::extractors::{ApiJson, ApiPath, ApiQuery, AppState, AuthenticatedUser};
use crate::representers::{ContactResource, Data, PaginatedCollection};

/// Search the caller's contacts
///
/// GET /api/contacts?name=&email=&phone=&page=&size=
pub async fn search(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<ContactSearchParams>,
) -> ApiResult<impl IntoResponse> {
    let page = state.services.contacts.search(&user, params).await?;
    Ok(Json(PaginatedCollection::new(page, uri.path(), ContactResource::from)))
}

/// POST /api/contacts
pub async fn create(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiJson(body): ApiJson<ContactInput>,
) -> ApiResult<impl IntoResponse> {
    let contact = state.services.contacts.create(&user, body).await?;
    Ok((StatusCode::CREATED, Json(Data::new(ContactResource::from(contact)))))
}

/// GET /api/contacts/:id
pub async fn get(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<Id>,
) -> ApiResult<impl IntoResponse> {
    let contact = state.services.contacts.get(&user, id).await?;
    Ok(Json(Data::new(ContactResource::from(contact))))
}

/// PUT /api/contacts/:id
pub async fn update(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<Id>,
    ApiJson(body): ApiJson<ContactInput>,
) -> ApiResult<impl IntoResponse> {
    let contact = state.services.contacts.update(&user, id, body).await?;
    Ok(Json(Data::new(ContactResource::from(contact))))
}

/// DELETE /api/contacts/:id
pub async fn delete(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<Id>,
) -> ApiResult<impl IntoResponse> {
    let done = state.services.contacts.delete(&user, id).await?;
    Ok(Json(Data::new(done)))
}
