//! API error handling
//!
//! Every failure renders as `{"errors": {<field or "message">: [..]}}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cm_auth::AuthError;
use cm_core::{CoreError, ValidationErrors};
use serde::Serialize;

/// API error: a core error on its way to the client
#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError(CoreError::bad_request(msg))
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError(CoreError::unauthorized(msg))
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    errors: ValidationErrors,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.0, "Request rejected");
        }

        let body = ErrorBody {
            errors: self.0.client_errors(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
