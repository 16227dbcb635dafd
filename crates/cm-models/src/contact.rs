//! Contact model
//!
//! Table: contacts

use chrono::{DateTime, Utc};
use cm_core::traits::{Entity, Id, Identifiable, Owned, Timestamped};
use serde::{Deserialize, Serialize};

/// An address-book entry owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: Id,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_id: Id,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Contact {
    fn id(&self) -> Id {
        self.id
    }
}

impl Timestamped for Contact {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Owned for Contact {
    fn owner_id(&self) -> Id {
        self.user_id
    }
}

impl Entity for Contact {
    const TYPE_NAME: &'static str = "Contact";
}

impl Contact {
    /// Case-insensitive substring match on first OR last name
    pub fn name_matches(&self, needle: &str) -> bool {
        contains_ci(&self.first_name, needle)
            || self
                .last_name
                .as_deref()
                .is_some_and(|last| contains_ci(last, needle))
    }

    pub fn email_matches(&self, needle: &str) -> bool {
        self.email.as_deref().is_some_and(|email| contains_ci(email, needle))
    }

    pub fn phone_matches(&self, needle: &str) -> bool {
        self.phone.as_deref().is_some_and(|phone| contains_ci(phone, needle))
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
