//! # cm-auth
//!
//! Authentication for Contacts RS.
//!
//! ## Features
//!
//! - Opaque session tokens issued at login and looked up per request
//! - Argon2 password hashing
//! - The `CurrentUser` identity handed to every protected operation

pub mod current_user;
pub mod middleware;
pub mod password;
pub mod token;

pub use current_user::CurrentUser;
pub use middleware::{AuthConfig, AuthError, Authenticator, UNAUTHORIZED};
pub use password::{hash_password, verify_password, verify_unknown_user};
pub use token::{extract_token, generate_token, DEFAULT_TOKEN_LENGTH};
