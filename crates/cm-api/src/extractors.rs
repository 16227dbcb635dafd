//! Axum extractors for API handlers

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequest, FromRequestParts},
    http::request::Parts,
};
use cm_auth::{AuthConfig, Authenticator, CurrentUser};
use cm_core::config::AppConfig;
use cm_db::Stores;
use cm_services::Services;

use crate::error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub authenticator: Authenticator,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(stores: Stores, config: AppConfig) -> Self {
        Self {
            services: Services::new(&stores, &config),
            authenticator: Authenticator::new(stores.users.clone(), AuthConfig::from(&config.auth)),
            config: Arc::new(config),
        }
    }

    /// State over a fresh in-memory store
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(Stores::memory(), config)
    }
}

/// Authenticated user extractor
///
/// Rejects with 401 `Unauthorized` when the token header is missing, empty
/// or matches no user.
pub struct AuthenticatedUser(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let authenticator = &app_state.authenticator;

        let header_value = parts
            .headers
            .get(authenticator.token_header())
            .and_then(|value| value.to_str().ok());

        let user = authenticator.authenticate(header_value).await?;
        Ok(AuthenticatedUser(user))
    }
}

impl std::ops::Deref for AuthenticatedUser {
    type Target = CurrentUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JSON body extractor whose rejections render as API errors (400)
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections render as API errors (400)
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Path extractor whose rejections render as API errors (400)
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
