//! Contact service
//!
//! Every operation is scoped to the acting user. A contact owned by someone
//! else is reported exactly like a missing one.

use std::sync::Arc;

use cm_auth::CurrentUser;
use cm_contracts::contacts::{ContactContract, ContactInput};
use cm_core::config::PaginationConfig;
use cm_core::traits::Id;
use cm_core::{CoreError, CoreResult, Page, PageRequest};
use cm_db::{ContactDto, ContactSearch, ContactStore};
use cm_models::{Contact, Entity};
use serde::Deserialize;

use crate::base::validate_with;

/// Search filters and paging as read from the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSearchParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

#[derive(Clone)]
pub struct ContactService {
    contacts: Arc<dyn ContactStore>,
    pagination: PaginationConfig,
}

impl ContactService {
    pub fn new(contacts: Arc<dyn ContactStore>, pagination: PaginationConfig) -> Self {
        Self { contacts, pagination }
    }

    pub async fn create(&self, actor: &CurrentUser, input: ContactInput) -> CoreResult<Contact> {
        let dto = validated(input)?;
        let contact = self.contacts.create(actor.id, dto).await?;
        tracing::debug!(user_id = actor.id, contact_id = contact.id, "Contact created");
        Ok(contact)
    }

    pub async fn get(&self, actor: &CurrentUser, id: Id) -> CoreResult<Contact> {
        self.contacts
            .find(actor.id, id)
            .await?
            .ok_or(CoreError::not_found(Contact::TYPE_NAME))
    }

    /// Replace all four fields; an omitted optional field is cleared
    pub async fn update(&self, actor: &CurrentUser, id: Id, input: ContactInput) -> CoreResult<Contact> {
        let dto = validated(input)?;
        let contact = self
            .contacts
            .replace(actor.id, id, dto)
            .await?
            .ok_or(CoreError::not_found(Contact::TYPE_NAME))?;
        tracing::debug!(user_id = actor.id, contact_id = id, "Contact updated");
        Ok(contact)
    }

    pub async fn delete(&self, actor: &CurrentUser, id: Id) -> CoreResult<bool> {
        if !self.contacts.delete(actor.id, id).await? {
            return Err(CoreError::not_found(Contact::TYPE_NAME));
        }
        tracing::debug!(user_id = actor.id, contact_id = id, "Contact deleted");
        Ok(true)
    }

    pub async fn search(&self, actor: &CurrentUser, params: ContactSearchParams) -> CoreResult<Page<Contact>> {
        let search = ContactSearch::new(params.name, params.email, params.phone);
        let page = PageRequest::new(
            params.page,
            params.size,
            self.pagination.default_size,
            self.pagination.max_size,
        );

        Ok(self.contacts.search(actor.id, &search, page).await?)
    }
}

fn validated(input: ContactInput) -> CoreResult<ContactDto> {
    let input = input.normalized();
    validate_with(&ContactContract, &input)?;

    Ok(ContactDto {
        first_name: input.first_name.unwrap_or_default(),
        last_name: input.last_name,
        email: input.email,
        phone: input.phone,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cm_db::MemoryStore;

    fn service() -> ContactService {
        ContactService::new(
            Arc::new(MemoryStore::new()),
            PaginationConfig {
                default_size: 10,
                max_size: 100,
            },
        )
    }

    fn owner() -> CurrentUser {
        CurrentUser::new(1, "SagAsh", "Sagara")
    }

    fn stranger() -> CurrentUser {
        CurrentUser::new(2, "other", "Other")
    }

    fn input(i: usize) -> ContactInput {
        ContactInput {
            first_name: Some(format!("first{}", i)),
            last_name: Some(format!("last{}", i)),
            email: Some(format!("email{}@example.com", i)),
            phone: Some(format!("111111{}", i)),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();
        let created = service.create(&owner(), input(1)).await.unwrap();
        assert_eq!(created.user_id, 1);

        let fetched = service.get(&owner(), created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_validation() {
        let service = service();
        let err = service
            .create(
                &owner(),
                ContactInput {
                    email: Some("salah".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        let errors = err.client_errors();
        assert!(errors.has_error("first_name"));
        assert!(errors.has_error("email"));
    }

    #[tokio::test]
    async fn test_non_owner_gets_not_found() {
        let service = service();
        let created = service.create(&owner(), input(1)).await.unwrap();

        for err in [
            service.get(&stranger(), created.id).await.unwrap_err(),
            service.update(&stranger(), created.id, input(2)).await.unwrap_err(),
            service.delete(&stranger(), created.id).await.unwrap_err(),
        ] {
            assert_eq!(err.status_code(), 404);
            assert_eq!(err.to_string(), "Contact not found");
        }

        // untouched
        assert_eq!(service.get(&owner(), created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let service = service();
        let created = service.create(&owner(), input(1)).await.unwrap();

        let updated = service
            .update(
                &owner(),
                created.id,
                ContactInput {
                    first_name: Some("Budi".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Budi");
        assert_eq!(updated.last_name, None);
        assert_eq!(updated.email, None);
        assert_eq!(updated.phone, None);
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service();
        let created = service.create(&owner(), input(1)).await.unwrap();
        assert!(service.delete(&owner(), created.id).await.unwrap());
        assert_eq!(service.get(&owner(), created.id).await.unwrap_err().status_code(), 404);
    }

    #[tokio::test]
    async fn test_search() {
        let service = service();
        for i in 0..20 {
            service.create(&owner(), input(i)).await.unwrap();
        }

        let page = service
            .search(
                &owner(),
                ContactSearchParams {
                    name: Some("first".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total, 20);

        let page = service
            .search(
                &owner(),
                ContactSearchParams {
                    size: Some(5),
                    page: Some(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.page, 2);

        let page = service
            .search(
                &owner(),
                ContactSearchParams {
                    email: Some("EMAIL1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        // email1, email10..email19
        assert_eq!(page.total, 11);

        let page = service
            .search(&stranger(), ContactSearchParams::default())
            .await
            .unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_search_size_is_capped() {
        let service = service();
        for i in 0..3 {
            service.create(&owner(), input(i)).await.unwrap();
        }
        let page = service
            .search(
                &owner(),
                ContactSearchParams {
                    size: Some(10_000),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(page.size, 100);
        assert_eq!(page.items.len(), 3);
    }
}
