//! Store traits
//!
//! Every contact and address lookup takes the parent in the ownership chain
//! alongside the id, so a record owned by someone else is indistinguishable
//! from a missing one. Implemented by the PostgreSQL repositories and by
//! [`MemoryStore`](crate::memory::MemoryStore).

use std::sync::Arc;

use async_trait::async_trait;
use cm_core::traits::Id;
use cm_core::{Page, PageRequest};
use cm_models::{Address, Contact, User};
use sqlx::PgPool;

use crate::addresses::{AddressDto, AddressRepository};
use crate::contacts::{ContactDto, ContactRepository, ContactSearch};
use crate::memory::MemoryStore;
use crate::repository::RepositoryResult;
use crate::users::{CreateUserDto, UpdateUserDto, UserRepository};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; `Conflict` when the username is taken
    async fn create(&self, dto: CreateUserDto) -> RepositoryResult<User>;

    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;

    async fn find_by_token(&self, token: &str) -> RepositoryResult<Option<User>>;

    /// Apply the supplied fields, keeping the rest
    async fn update(&self, id: Id, dto: UpdateUserDto) -> RepositoryResult<User>;

    /// Set or clear the session token
    async fn set_token(&self, id: Id, token: Option<&str>) -> RepositoryResult<()>;
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn create(&self, user_id: Id, dto: ContactDto) -> RepositoryResult<Contact>;

    /// Contact `id` if it belongs to `user_id`
    async fn find(&self, user_id: Id, id: Id) -> RepositoryResult<Option<Contact>>;

    /// Replace every field; `None` when not found or not owned
    async fn replace(&self, user_id: Id, id: Id, dto: ContactDto) -> RepositoryResult<Option<Contact>>;

    /// Delete the contact and its addresses; `false` when not found or not owned
    async fn delete(&self, user_id: Id, id: Id) -> RepositoryResult<bool>;

    /// Filtered page of the user's contacts, ordered by id
    async fn search(
        &self,
        user_id: Id,
        search: &ContactSearch,
        page: PageRequest,
    ) -> RepositoryResult<Page<Contact>>;
}

#[async_trait]
pub trait AddressStore: Send + Sync {
    async fn create(&self, contact_id: Id, dto: AddressDto) -> RepositoryResult<Address>;

    /// Address `id` if it belongs to `contact_id`
    async fn find(&self, contact_id: Id, id: Id) -> RepositoryResult<Option<Address>>;

    async fn list(&self, contact_id: Id) -> RepositoryResult<Vec<Address>>;

    async fn replace(&self, contact_id: Id, id: Id, dto: AddressDto) -> RepositoryResult<Option<Address>>;

    async fn delete(&self, contact_id: Id, id: Id) -> RepositoryResult<bool>;
}

/// The three stores behind shared handles
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub contacts: Arc<dyn ContactStore>,
    pub addresses: Arc<dyn AddressStore>,
}

impl Stores {
    /// PostgreSQL-backed stores sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            contacts: Arc::new(ContactRepository::new(pool.clone())),
            addresses: Arc::new(AddressRepository::new(pool)),
        }
    }

    /// All three stores backed by one in-memory store
    pub fn memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::new()))
    }

    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            contacts: store.clone(),
            addresses: store,
        }
    }
}
