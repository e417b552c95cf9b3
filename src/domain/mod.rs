// src/domain/mod.rs
pub mod backend;
pub mod error;
pub mod saved_query;
pub mod wallhaven;

pub use backend::{BackendDefinition, BackendDescriptor};
pub use error::DomainError;
pub use saved_query::SavedQuery;
