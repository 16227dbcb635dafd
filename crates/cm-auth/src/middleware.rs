//! Authentication gate
//!
//! Resolves the token header of a request to the user holding that token.

use std::sync::Arc;

use cm_core::CoreError;
use cm_db::{RepositoryError, UserStore};
use thiserror::Error;

use crate::current_user::CurrentUser;
use crate::token::extract_token;

/// Message for every authentication failure
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Header missing or empty
    #[error("Authentication required")]
    Required,
    /// Token matches no user
    #[error("Invalid token")]
    InvalidToken,
    #[error("Password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl From<AuthError> for CoreError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Required | AuthError::InvalidToken => CoreError::unauthorized(UNAUTHORIZED),
            AuthError::Hashing(message) => CoreError::Internal(message),
            AuthError::Store(e) => e.into(),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Header carrying the token, lowercase
    pub token_header: String,
    /// Length of tokens issued at login
    pub token_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from(&cm_core::config::AppConfig::default().auth)
    }
}

impl From<&cm_core::config::AuthConfig> for AuthConfig {
    fn from(config: &cm_core::config::AuthConfig) -> Self {
        Self {
            token_header: config.token_header.to_ascii_lowercase(),
            token_length: config.token_length,
        }
    }
}

/// Authenticator for validating requests
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn UserStore>,
    config: AuthConfig,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserStore>, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Name of the header the token is read from
    pub fn token_header(&self) -> &str {
        &self.config.token_header
    }

    /// Authenticate a request from the raw value of its token header
    pub async fn authenticate(&self, header_value: Option<&str>) -> Result<CurrentUser, AuthError> {
        let token = header_value
            .and_then(extract_token)
            .ok_or(AuthError::Required)?;

        let user = self
            .users
            .find_by_token(token)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        tracing::trace!(user_id = user.id, "Request authenticated");
        Ok(CurrentUser::from(user))
    }
}
