//! Core error types for Contacts RS
//!
//! Every failure a client can observe is one of these variants. The HTTP
//! layer only decides how to render them.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Key used for errors that are not tied to a request field
pub const MESSAGE_KEY: &str = "message";

/// Core error type for all Contacts RS operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Resource absent, or present but not owned by the acting user
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Conflict on {field}: {message}")]
    Conflict { field: &'static str, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str) -> Self {
        CoreError::NotFound { entity }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        CoreError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn conflict(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Conflict {
            field,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        CoreError::BadRequest(message.into())
    }

    /// HTTP status code mapping
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::Validation(_) | CoreError::Conflict { .. } | CoreError::BadRequest(_) => 400,
            CoreError::Unauthorized { .. } => 401,
            CoreError::NotFound { .. } => 404,
            CoreError::Database(_) | CoreError::Internal(_) => 500,
        }
    }

    /// Field-keyed messages as exposed to clients.
    ///
    /// Server-side failures get a generic message; the detail only goes to the log.
    pub fn client_errors(&self) -> ValidationErrors {
        match self {
            CoreError::Validation(errors) => errors.clone(),
            CoreError::Conflict { field, message } => ValidationErrors::single(*field, message.clone()),
            CoreError::NotFound { entity } => {
                ValidationErrors::single(MESSAGE_KEY, format!("{} not found", entity))
            }
            CoreError::Unauthorized { message } => ValidationErrors::single(MESSAGE_KEY, message.clone()),
            CoreError::BadRequest(message) => ValidationErrors::single(MESSAGE_KEY, message.clone()),
            CoreError::Database(_) | CoreError::Internal(_) => {
                ValidationErrors::single(MESSAGE_KEY, "Internal server error")
            }
        }
    }
}

/// Validation errors collection: field name -> messages.
///
/// Serializes as a plain JSON object so it can be embedded directly under
/// the `errors` key of a response body.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages.iter().map(move |msg| format!("{}: {}", field, msg))
            })
            .collect()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_accumulate_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("first_name", "The first name field is required.");
        errors.add("email", "The email field must be a valid email address.");
        errors.add("email", "second");

        assert_eq!(errors.len(), 2);
        assert!(errors.has_error("first_name"));
        assert_eq!(errors.get("email").map(Vec::len), Some(2));
    }

    #[test]
    fn test_validation_errors_serialize_as_object() {
        let errors = ValidationErrors::single("country", "The country field is required.");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "country": ["The country field is required."] })
        );
    }

    #[test]
    fn test_display_joins_messages() {
        let mut errors = ValidationErrors::single("name", "too long");
        errors.add("email", "invalid");

        assert_eq!(errors.to_string(), "email: invalid, name: too long");
        assert_eq!(
            CoreError::from(errors).to_string(),
            "Validation failed: email: invalid, name: too long"
        );
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
        assert!(ValidationErrors::single("a", "b").into_result().is_err());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(CoreError::not_found("Contact").status_code(), 404);
        assert_eq!(CoreError::unauthorized("Unauthorized").status_code(), 401);
        assert_eq!(CoreError::conflict("username", "taken").status_code(), 400);
        assert_eq!(CoreError::Validation(ValidationErrors::new()).status_code(), 400);
        assert_eq!(CoreError::Database("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_client_errors_hide_internal_detail() {
        let errors = CoreError::Database("relation \"users\" does not exist".into()).client_errors();
        assert_eq!(errors.get(MESSAGE_KEY), Some(&vec!["Internal server error".to_string()]));
    }

    #[test]
    fn test_not_found_message() {
        let errors = CoreError::not_found("Address").client_errors();
        assert_eq!(errors.get(MESSAGE_KEY), Some(&vec!["Address not found".to_string()]));
    }
}
