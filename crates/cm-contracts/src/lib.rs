//! # cm-contracts
//!
//! Contract validation for Contacts RS.
//!
//! Each write operation has a contract: an ordered list of field rules run
//! against the normalized request before anything touches the store.

pub mod addresses;
pub mod base;
pub mod contacts;
pub mod users;

pub use base::*;
