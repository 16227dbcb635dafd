//! User model
//!
//! Table: users

use chrono::{DateTime, Utc};
use cm_core::traits::{Entity, Id, Identifiable, Timestamped};
use serde::{Deserialize, Serialize};

/// User account.
///
/// The password is only ever held as an argon2 PHC string. Neither it nor
/// the session token is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Id,

    /// Login name (unique)
    pub username: String,

    /// Argon2 digest
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Display name
    pub name: String,

    /// Current session token; `None` when logged out
    #[serde(skip_serializing, default)]
    pub token: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for User {
    fn id(&self) -> Id {
        self.id
    }
}

impl Timestamped for User {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for User {
    const TYPE_NAME: &'static str = "User";
}

impl User {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}
