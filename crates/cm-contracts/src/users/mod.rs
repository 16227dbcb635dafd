//! User contracts
//!
//! Registration, login and profile update each validate their own
//! request shape.

pub mod create;
pub mod login;
pub mod update;

pub use create::{CreateUserContract, RegisterUser};
pub use login::{LoginContract, LoginUser};
pub use update::{UpdateUser, UpdateUserContract};

use crate::base::Rule;

/// Rules shared by every user attribute when it is supplied
pub(crate) const USER_FIELD_MAX: Rule = Rule::MaxLength(100);
