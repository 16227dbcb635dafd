//! Result type aliases

use crate::error::CoreError;

/// Standard Result type for Contacts RS operations
pub type CoreResult<T> = Result<T, CoreError>;
