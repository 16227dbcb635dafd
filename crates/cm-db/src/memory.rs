//! In-memory store
//!
//! Implements all three store traits over lock-guarded maps. Used by the
//! test suites and for running the server without a database. Behaves like
//! the PostgreSQL schema: unique usernames, per-table id sequences and
//! cascading contact deletes.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use cm_core::traits::{Id, Owned};
use cm_core::{Page, PageRequest};
use cm_models::{Address, Contact, User};
use parking_lot::RwLock;

use crate::addresses::AddressDto;
use crate::contacts::{ContactDto, ContactSearch};
use crate::repository::{RepositoryError, RepositoryResult};
use crate::store::{AddressStore, ContactStore, UserStore};
use crate::users::{CreateUserDto, UpdateUserDto, USERNAME_TAKEN};

#[derive(Default)]
struct Sequence(Id);

impl Sequence {
    fn next(&mut self) -> Id {
        self.0 += 1;
        self.0
    }
}

#[derive(Default)]
struct State {
    user_seq: Sequence,
    contact_seq: Sequence,
    address_seq: Sequence,
    users: BTreeMap<Id, User>,
    contacts: BTreeMap<Id, Contact>,
    addresses: BTreeMap<Id, Address>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, dto: CreateUserDto) -> RepositoryResult<User> {
        let mut state = self.state.write();
        if state.users.values().any(|u| u.username == dto.username) {
            return Err(RepositoryError::Conflict {
                field: "username",
                message: USERNAME_TAKEN.to_string(),
            });
        }

        let now = Utc::now();
        let user = User {
            id: state.user_seq.next(),
            username: dto.username,
            password: dto.password,
            name: dto.name,
            token: None,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<User>> {
        Ok(self.state.read().users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .state
            .read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_token(&self, token: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .state
            .read()
            .users
            .values()
            .find(|u| u.token.as_deref() == Some(token))
            .cloned())
    }

    async fn update(&self, id: Id, dto: UpdateUserDto) -> RepositoryResult<User> {
        let mut state = self.state.write();
        let user = state
            .users
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound("User"))?;

        if let Some(name) = dto.name {
            user.name = name;
        }
        if let Some(password) = dto.password {
            user.password = password;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn set_token(&self, id: Id, token: Option<&str>) -> RepositoryResult<()> {
        let mut state = self.state.write();
        let user = state
            .users
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound("User"))?;

        user.token = token.map(str::to_string);
        user.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn create(&self, user_id: Id, dto: ContactDto) -> RepositoryResult<Contact> {
        let mut state = self.state.write();
        let now = Utc::now();
        let contact = Contact {
            id: state.contact_seq.next(),
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            user_id,
            created_at: now,
            updated_at: now,
        };
        state.contacts.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn find(&self, user_id: Id, id: Id) -> RepositoryResult<Option<Contact>> {
        Ok(self
            .state
            .read()
            .contacts
            .get(&id)
            .filter(|c| c.is_owned_by(user_id))
            .cloned())
    }

    async fn replace(&self, user_id: Id, id: Id, dto: ContactDto) -> RepositoryResult<Option<Contact>> {
        let mut state = self.state.write();
        let Some(contact) = state.contacts.get_mut(&id).filter(|c| c.is_owned_by(user_id)) else {
            return Ok(None);
        };

        contact.first_name = dto.first_name;
        contact.last_name = dto.last_name;
        contact.email = dto.email;
        contact.phone = dto.phone;
        contact.updated_at = Utc::now();
        Ok(Some(contact.clone()))
    }

    async fn delete(&self, user_id: Id, id: Id) -> RepositoryResult<bool> {
        let mut state = self.state.write();
        let owned = state.contacts.get(&id).is_some_and(|c| c.is_owned_by(user_id));
        if !owned {
            return Ok(false);
        }

        state.contacts.remove(&id);
        state.addresses.retain(|_, a| a.contact_id != id);
        Ok(true)
    }

    async fn search(
        &self,
        user_id: Id,
        search: &ContactSearch,
        page: PageRequest,
    ) -> RepositoryResult<Page<Contact>> {
        let state = self.state.read();
        let matching: Vec<&Contact> = state
            .contacts
            .values()
            .filter(|c| c.is_owned_by(user_id) && search.matches(c))
            .collect();

        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, total, page))
    }
}

#[async_trait]
impl AddressStore for MemoryStore {
    async fn create(&self, contact_id: Id, dto: AddressDto) -> RepositoryResult<Address> {
        let mut state = self.state.write();
        if !state.contacts.contains_key(&contact_id) {
            return Err(RepositoryError::NotFound("Contact"));
        }

        let now = Utc::now();
        let address = Address {
            id: state.address_seq.next(),
            street: dto.street,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            postal_code: dto.postal_code,
            contact_id,
            created_at: now,
            updated_at: now,
        };
        state.addresses.insert(address.id, address.clone());
        Ok(address)
    }

    async fn find(&self, contact_id: Id, id: Id) -> RepositoryResult<Option<Address>> {
        Ok(self
            .state
            .read()
            .addresses
            .get(&id)
            .filter(|a| a.is_owned_by(contact_id))
            .cloned())
    }

    async fn list(&self, contact_id: Id) -> RepositoryResult<Vec<Address>> {
        Ok(self
            .state
            .read()
            .addresses
            .values()
            .filter(|a| a.is_owned_by(contact_id))
            .cloned()
            .collect())
    }

    async fn replace(&self, contact_id: Id, id: Id, dto: AddressDto) -> RepositoryResult<Option<Address>> {
        let mut state = self.state.write();
        let Some(address) = state.addresses.get_mut(&id).filter(|a| a.is_owned_by(contact_id)) else {
            return Ok(None);
        };

        address.street = dto.street;
        address.city = dto.city;
        address.state = dto.state;
        address.country = dto.country;
        address.postal_code = dto.postal_code;
        address.updated_at = Utc::now();
        Ok(Some(address.clone()))
    }

    async fn delete(&self, contact_id: Id, id: Id) -> RepositoryResult<bool> {
        let mut state = self.state.write();
        let owned = state.addresses.get(&id).is_some_and(|a| a.is_owned_by(contact_id));
        if owned {
            state.addresses.remove(&id);
        }
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_dto(username: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.to_string(),
            password: "digest".to_string(),
            name: "Test".to_string(),
        }
    }

    fn contact_dto(i: usize) -> ContactDto {
        ContactDto {
            first_name: format!("first{}", i),
            last_name: Some(format!("last{}", i)),
            email: Some(format!("email{}@example.com", i)),
            phone: Some(format!("111111{}", i)),
        }
    }

    fn address_dto(country: &str) -> AddressDto {
        AddressDto {
            street: None,
            city: None,
            state: None,
            country: country.to_string(),
            postal_code: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = MemoryStore::new();
        UserStore::create(&store, user_dto("SagAsh")).await.unwrap();

        let err = UserStore::create(&store, user_dto("SagAsh")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict { field: "username", .. }));
    }

    #[tokio::test]
    async fn test_token_lookup() {
        let store = MemoryStore::new();
        let user = UserStore::create(&store, user_dto("SagAsh")).await.unwrap();

        store.set_token(user.id, Some("tok")).await.unwrap();
        let found = store.find_by_token("tok").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));

        store.set_token(user.id, None).await.unwrap();
        assert!(store.find_by_token("tok").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_unsupplied_fields() {
        let store = MemoryStore::new();
        let user = UserStore::create(&store, user_dto("SagAsh")).await.unwrap();

        let updated = UserStore::update(
            &store,
            user.id,
            UpdateUserDto {
                name: Some("Renamed".to_string()),
                password: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.password, "digest");
    }

    #[tokio::test]
    async fn test_contacts_are_owner_scoped() {
        let store = MemoryStore::new();
        let contact = ContactStore::create(&store, 1, contact_dto(1)).await.unwrap();

        assert!(ContactStore::find(&store, 1, contact.id).await.unwrap().is_some());
        assert!(ContactStore::find(&store, 2, contact.id).await.unwrap().is_none());
        assert!(ContactStore::replace(&store, 2, contact.id, contact_dto(9))
            .await
            .unwrap()
            .is_none());
        assert!(!ContactStore::delete(&store, 2, contact.id).await.unwrap());
        assert!(ContactStore::delete(&store, 1, contact.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_contact_cascades() {
        let store = MemoryStore::new();
        let contact = ContactStore::create(&store, 1, contact_dto(1)).await.unwrap();
        let address = AddressStore::create(&store, contact.id, address_dto("Indonesia"))
            .await
            .unwrap();

        ContactStore::delete(&store, 1, contact.id).await.unwrap();
        assert!(AddressStore::find(&store, contact.id, address.id).await.unwrap().is_none());
        assert!(AddressStore::list(&store, contact.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_paginates() {
        let store = MemoryStore::new();
        for i in 0..20 {
            ContactStore::create(&store, 1, contact_dto(i)).await.unwrap();
        }
        ContactStore::create(&store, 2, contact_dto(99)).await.unwrap();

        let all = ContactSearch::default();
        let page = store
            .search(1, &all, PageRequest::new(Some(2), Some(5), 10, 100))
            .await
            .unwrap();
        assert_eq!(page.total, 20);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].first_name, "first5");

        let none = ContactSearch::new(Some("nomatch".into()), None, None);
        let page = store.search(1, &none, PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_address_scoped_to_contact() {
        let store = MemoryStore::new();
        let a = ContactStore::create(&store, 1, contact_dto(1)).await.unwrap();
        let b = ContactStore::create(&store, 1, contact_dto(2)).await.unwrap();
        let address = AddressStore::create(&store, a.id, address_dto("Indonesia"))
            .await
            .unwrap();

        assert!(AddressStore::find(&store, b.id, address.id).await.unwrap().is_none());
        assert!(!AddressStore::delete(&store, b.id, address.id).await.unwrap());

        let replaced = AddressStore::replace(&store, a.id, address.id, address_dto("Malaysia"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(replaced.country, "Malaysia");
    }
}
