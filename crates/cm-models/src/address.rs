//! Address model
//!
//! Table: addresses

use chrono::{DateTime, Utc};
use cm_core::traits::{Entity, Id, Identifiable, Owned, Timestamped};
use serde::{Deserialize, Serialize};

/// A postal address attached to one contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Address {
    pub id: Id,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: String,
    pub postal_code: Option<String>,
    pub contact_id: Id,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Address {
    fn id(&self) -> Id {
        self.id
    }
}

impl Timestamped for Address {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Owned for Address {
    fn owner_id(&self) -> Id {
        self.contact_id
    }
}

impl Entity for Address {
    const TYPE_NAME: &'static str = "Address";
}
