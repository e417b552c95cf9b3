// src/domain/saved_query.rs
use serde::{Deserialize, Serialize};

/// A wallhaven search the user wants wallpapers fetched from repeatedly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuery {
    pub description: String,
    pub url: String,
}

impl SavedQuery {
    pub fn new(description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            url: url.into(),
        }
    }
}
