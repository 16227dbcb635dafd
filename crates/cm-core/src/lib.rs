//! # cm-core
//!
//! Core types and utilities for Contacts RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types and the validation error aggregate
//! - Result type aliases
//! - Core traits (Identifiable, Timestamped)
//! - Pagination types
//! - Configuration types

pub mod config;
pub mod error;
pub mod pagination;
pub mod result;
pub mod traits;

pub use error::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;
