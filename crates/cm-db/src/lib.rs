//! # cm-db
//!
//! Database layer for Contacts RS.
//!
//! This crate provides:
//!
//! - Connection pool management and schema migrations
//! - Store traits for users, contacts and addresses
//! - PostgreSQL repositories implementing them
//! - An in-memory implementation for tests and database-less runs
//!
//! ## Example
//!
//! ```ignore
//! use cm_db::{Database, DatabaseConfig, Stores};
//!
//! let db = Database::connect(&DatabaseConfig::default()).await?;
//! db.migrate().await?;
//!
//! let stores = Stores::postgres(db.pool().clone());
//! let user = stores.users.find_by_username("SagAsh").await?;
//! ```

pub mod addresses;
pub mod contacts;
pub mod memory;
pub mod pool;
pub mod repository;
pub mod store;
pub mod users;

// Re-exports
pub use addresses::{AddressDto, AddressRepository};
pub use contacts::{ContactDto, ContactRepository, ContactSearch};
pub use memory::MemoryStore;
pub use pool::{Database, DatabaseConfig, PoolStats};
pub use repository::{RepositoryError, RepositoryResult};
pub use store::{AddressStore, ContactStore, Stores, UserStore};
pub use users::{CreateUserDto, UpdateUserDto, UserRepository, USERNAME_TAKEN};
