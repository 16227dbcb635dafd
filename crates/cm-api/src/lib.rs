//! # cm-api
//!
//! REST API handlers for Contacts RS.
//!
//! JSON in, JSON out. Successful responses wrap their payload in `data`;
//! failures carry an `errors` map keyed by field or `message`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod representers;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use extractors::AppState;
pub use routes::router;
