//! API Representers
//!
//! Convert domain models to the JSON shapes returned by the API.

pub mod address;
pub mod collection;
pub mod contact;
pub mod user;

pub use address::AddressResource;
pub use collection::{Data, PageLinks, PageMeta, PaginatedCollection};
pub use contact::ContactResource;
pub use user::{LoginResource, UserResource};
