//! # cm-models
//!
//! Domain models for Contacts RS.
//!
//! One struct per table. Each model implements the core traits from
//! `cm-core` (Entity, Identifiable, Timestamped and, for children in the
//! ownership chain, Owned) and derives `sqlx::FromRow` so the repositories
//! can map rows straight into it.

pub use cm_core::traits::{Entity, Id, Identifiable, Owned, Timestamped};

pub mod address;
pub mod contact;
pub mod user;

pub use address::Address;
pub use contact::Contact;
pub use user::User;
