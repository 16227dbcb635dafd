//! # cm-services
//!
//! Business logic services for Contacts RS.
//!
//! Services validate input through the contracts, scope every read and
//! write by the acting user, and report failures as `CoreError`.

pub mod addresses;
pub mod base;
pub mod contacts;
pub mod users;

pub use addresses::AddressService;
pub use base::validate_with;
pub use contacts::{ContactSearchParams, ContactService};
pub use users::{UserService, BAD_CREDENTIALS};

use cm_core::config::AppConfig;
use cm_db::Stores;

/// All services over one set of stores
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub contacts: ContactService,
    pub addresses: AddressService,
}

impl Services {
    pub fn new(stores: &Stores, config: &AppConfig) -> Self {
        Self {
            users: UserService::new(stores.users.clone(), config.auth.token_length),
            contacts: ContactService::new(stores.contacts.clone(), config.pagination),
            addresses: AddressService::new(stores.contacts.clone(), stores.addresses.clone()),
        }
    }
}
