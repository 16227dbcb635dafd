//! Addresses API handlers
//!
//! Nested under a contact: `/api/contacts/:id/addresses`.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cm_contracts::addresses::AddressInput;
use cm_core::traits::Id;

use crate::error::ApiResult;
use crate::extractors::{ApiJson, ApiPath, AppState, AuthenticatedUser};
use crate::representers::{AddressResource, Data};

pub async fn list(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(contact_id): ApiPath<Id>,
) -> ApiResult<impl IntoResponse> {
    let addresses = state.services.addresses.list(&user, contact_id).await?;
    let data: Vec<AddressResource> = addresses.into_iter().map(AddressResource::from).collect();
    Ok(Json(Data::new(data)))
}

pub async fn create(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(contact_id): ApiPath<Id>,
    ApiJson(body): ApiJson<AddressInput>,
) -> ApiResult<impl IntoResponse> {
    let address = state.services.addresses.create(&user, contact_id, body).await?;
    Ok((StatusCode::CREATED, Json(Data::new(AddressResource::from(address)))))
}

pub async fn get(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath((contact_id, id)): ApiPath<(Id, Id)>,
) -> ApiResult<impl IntoResponse> {
    let address = state.services.addresses.get(&user, contact_id, id).await?;
    Ok(Json(Data::new(AddressResource::from(address))))
}

/// Full replace
pub async fn update(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath((contact_id, id)): ApiPath<(Id, Id)>,
    ApiJson(body): ApiJson<AddressInput>,
) -> ApiResult<impl IntoResponse> {
    let address = state.services.addresses.update(&user, contact_id, id, body).await?;
    Ok(Json(Data::new(AddressResource::from(address))))
}

pub async fn delete(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath((contact_id, id)): ApiPath<(Id, Id)>,
) -> ApiResult<impl IntoResponse> {
    let done = state.services.addresses.delete(&user, contact_id, id).await?;
    Ok(Json(Data::new(done)))
}
