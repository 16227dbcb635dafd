//! Core traits shared by the domain entities

use chrono::{DateTime, Utc};

/// Primary key type
pub type Id = i64;

/// Trait for entities that have a primary key
pub trait Identifiable {
    fn id(&self) -> Id;
}

/// Trait for entities with timestamps (created_at, updated_at)
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

/// Trait for entities scoped to exactly one parent in the ownership chain
/// (a contact belongs to a user, an address belongs to a contact)
pub trait Owned {
    fn owner_id(&self) -> Id;

    fn is_owned_by(&self, owner: Id) -> bool {
        self.owner_id() == owner
    }
}

/// Base trait for all domain entities
pub trait Entity: Identifiable + Timestamped + Send + Sync {
    /// Human-readable type name, used in "<Type> not found" messages
    const TYPE_NAME: &'static str;
}
