//! Address service
//!
//! Addresses are reached through their contact: the contact must belong to
//! the acting user, then the address must belong to the contact.

use std::sync::Arc;

use cm_auth::CurrentUser;
use cm_contracts::addresses::{AddressContract, AddressInput};
use cm_core::traits::Id;
use cm_core::{CoreError, CoreResult};
use cm_db::{AddressDto, AddressStore, ContactStore};
use cm_models::{Address, Contact, Entity};

use crate::base::validate_with;

#[derive(Clone)]
pub struct AddressService {
    contacts: Arc<dyn ContactStore>,
    addresses: Arc<dyn AddressStore>,
}

impl AddressService {
    pub fn new(contacts: Arc<dyn ContactStore>, addresses: Arc<dyn AddressStore>) -> Self {
        Self { contacts, addresses }
    }

    async fn owned_contact(&self, actor: &CurrentUser, contact_id: Id) -> CoreResult<Contact> {
        self.contacts
            .find(actor.id, contact_id)
            .await?
            .ok_or(CoreError::not_found(Contact::TYPE_NAME))
    }

    pub async fn create(&self, actor: &CurrentUser, contact_id: Id, input: AddressInput) -> CoreResult<Address> {
        let dto = validated(input)?;
        let contact = self.owned_contact(actor, contact_id).await?;

        let address = self.addresses.create(contact.id, dto).await?;
        tracing::debug!(contact_id, address_id = address.id, "Address created");
        Ok(address)
    }

    pub async fn get(&self, actor: &CurrentUser, contact_id: Id, id: Id) -> CoreResult<Address> {
        let contact = self.owned_contact(actor, contact_id).await?;
        self.addresses
            .find(contact.id, id)
            .await?
            .ok_or(CoreError::not_found(Address::TYPE_NAME))
    }

    pub async fn list(&self, actor: &CurrentUser, contact_id: Id) -> CoreResult<Vec<Address>> {
        let contact = self.owned_contact(actor, contact_id).await?;
        Ok(self.addresses.list(contact.id).await?)
    }

    /// Replace every field; an omitted optional field is cleared
    pub async fn update(
        &self,
        actor: &CurrentUser,
        contact_id: Id,
        id: Id,
        input: AddressInput,
    ) -> CoreResult<Address> {
        let dto = validated(input)?;
        let contact = self.owned_contact(actor, contact_id).await?;

        let address = self
            .addresses
            .replace(contact.id, id, dto)
            .await?
            .ok_or(CoreError::not_found(Address::TYPE_NAME))?;
        tracing::debug!(contact_id, address_id = id, "Address updated");
        Ok(address)
    }

    pub async fn delete(&self, actor: &CurrentUser, contact_id: Id, id: Id) -> CoreResult<bool> {
        let contact = self.owned_contact(actor, contact_id).await?;
        if !self.addresses.delete(contact.id, id).await? {
            return Err(CoreError::not_found(Address::TYPE_NAME));
        }
        tracing::debug!(contact_id, address_id = id, "Address deleted");
        Ok(true)
    }
}

fn validated(input: AddressInput) -> CoreResult<AddressDto> {
    let input = input.normalized();
    validate_with(&AddressContract, &input)?;

    Ok(AddressDto {
        street: input.street,
        city: input.city,
        state: input.state,
        country: input.country.unwrap_or_default(),
        postal_code: input.postal_code,
    })
}
