//! The acting identity of a request

use cm_core::traits::Id;
use cm_models::User;

/// Authenticated user resolved from the session token.
///
/// Carries only what the services need; never the password digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Id,
    pub username: String,
    pub name: String,
}

impl CurrentUser {
    pub fn new(id: Id, username: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.username.clone(), user.name.clone())
    }
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
        }
    }
}
