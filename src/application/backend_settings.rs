// src/application/backend_settings.rs
use crate::application::PreferenceStore;
use crate::domain::{BackendDescriptor, DomainError, SavedQuery};
use tracing::{debug, info, instrument, warn};

/// Reads and writes the preferences owned by one backend.
///
/// Every value is checked against the descriptor before it reaches the store.
pub struct BackendSettings<'a, S: PreferenceStore> {
    descriptor: &'a BackendDescriptor,
    store: S,
}

impl<'a, S: PreferenceStore> BackendSettings<'a, S> {
    pub fn new(descriptor: &'a BackendDescriptor, store: S) -> Self {
        Self { descriptor, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored API key; an empty value counts as unset.
    pub fn api_key(&self) -> Result<Option<String>, DomainError> {
        let value = self.store.get_string(&self.descriptor.api_key_key())?;
        Ok(value.filter(|key| !key.is_empty()))
    }

    #[instrument(level = "debug", skip(self, api_key), fields(backend = self.descriptor.service_name()))]
    pub fn set_api_key(&mut self, api_key: &str) -> Result<(), DomainError> {
        if !self.descriptor.validate_api_key(api_key) {
            debug!(len = api_key.len(), "Rejected malformed API key");
            return Err(DomainError::InvalidApiKey);
        }
        self.store
            .set_string(&self.descriptor.api_key_key(), api_key)?;
        info!("Stored API key");
        Ok(())
    }

    pub fn clear_api_key(&mut self) -> Result<(), DomainError> {
        self.store.set_string(&self.descriptor.api_key_key(), "")
    }

    /// Stored queries that still pass the descriptor's checks.
    ///
    /// Entries that fail them (e.g. a hand-edited store) are skipped and
    /// dropped on the next write.
    pub fn saved_queries(&self) -> Result<Vec<SavedQuery>, DomainError> {
        let key = self.descriptor.queries_key();
        let stored: Vec<SavedQuery> = match self.store.get_string(&key)? {
            None => return Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => return Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| DomainError::CorruptPreference {
                    key,
                    reason: e.to_string(),
                })?
            }
        };

        Ok(stored
            .into_iter()
            .filter(|query| {
                let valid = self.descriptor.validate_description(&query.description)
                    && self.descriptor.validate_search_url(&query.url);
                if !valid {
                    warn!(url = %query.url, "Skipping invalid saved query");
                }
                valid
            })
            .collect())
    }

    #[instrument(level = "debug", skip(self), fields(backend = self.descriptor.service_name()))]
    pub fn add_query(&mut self, description: &str, url: &str) -> Result<SavedQuery, DomainError> {
        if !self.descriptor.validate_description(description) {
            return Err(DomainError::InvalidDescription);
        }
        if !self.descriptor.validate_search_url(url) {
            return Err(DomainError::InvalidSearchUrl(url.to_string()));
        }

        let mut queries = self.saved_queries()?;
        if queries.iter().any(|q| q.url == url) {
            return Err(DomainError::DuplicateQuery(url.to_string()));
        }

        let query = SavedQuery::new(description, url);
        queries.push(query.clone());
        self.write_queries(&queries)?;
        info!(count = queries.len(), "Saved query added");
        Ok(query)
    }

    pub fn remove_query(&mut self, index: usize) -> Result<SavedQuery, DomainError> {
        let mut queries = self.saved_queries()?;
        if index >= queries.len() {
            return Err(DomainError::QueryIndexOutOfRange {
                index,
                len: queries.len(),
            });
        }

        let removed = queries.remove(index);
        self.write_queries(&queries)?;
        info!(url = %removed.url, "Saved query removed");
        Ok(removed)
    }

    fn write_queries(&mut self, queries: &[SavedQuery]) -> Result<(), DomainError> {
        let key = self.descriptor.queries_key();
        let raw = serde_json::to_string(queries).map_err(|e| DomainError::CorruptPreference {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        self.store.set_string(&key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wallhaven::WALLHAVEN;
    use crate::util::testing::MockPreferenceStore;

    const VALID_KEY: &str = "a1b2c3d4e5f6g7h8i9j0k1l2m3n4o5p6";

    fn wallhaven() -> BackendDescriptor {
        BackendDescriptor::compile(WALLHAVEN).unwrap()
    }

    #[test]
    fn given_valid_key_when_setting_api_key_then_stored_under_namespaced_key() {
        // Arrange
        let descriptor = wallhaven();
        let mut settings = BackendSettings::new(&descriptor, MockPreferenceStore::builder().build());

        // Act
        settings.set_api_key(VALID_KEY).unwrap();

        // Assert
        assert_eq!(
            settings.store().value("wallhaven_api_key").as_deref(),
            Some(VALID_KEY)
        );
        assert_eq!(settings.api_key().unwrap().as_deref(), Some(VALID_KEY));
    }

    #[test]
    fn given_malformed_key_when_setting_api_key_then_store_untouched() {
        // Arrange
        let descriptor = wallhaven();
        let store = MockPreferenceStore::builder()
            .with_value("wallhaven_api_key", VALID_KEY)
            .build();
        let mut settings = BackendSettings::new(&descriptor, store);

        // Act
        let result = settings.set_api_key("short");

        // Assert
        assert!(matches!(result, Err(DomainError::InvalidApiKey)));
        assert_eq!(settings.store().write_count(), 0);
        assert_eq!(settings.api_key().unwrap().as_deref(), Some(VALID_KEY));
    }

    #[test]
    fn given_stored_key_when_clearing_then_reads_as_unset() {
        let descriptor = wallhaven();
        let store = MockPreferenceStore::builder()
            .with_value("wallhaven_api_key", VALID_KEY)
            .build();
        let mut settings = BackendSettings::new(&descriptor, store);

        settings.clear_api_key().unwrap();

        assert_eq!(settings.api_key().unwrap(), None);
    }

    #[test]
    fn given_no_stored_queries_when_listing_then_returns_empty() {
        let descriptor = wallhaven();
        let settings = BackendSettings::new(&descriptor, MockPreferenceStore::builder().build());

        assert!(settings.saved_queries().unwrap().is_empty());
    }

    #[test]
    fn given_valid_query_when_adding_then_persisted_as_json() {
        // Arrange
        let descriptor = wallhaven();
        let mut settings = BackendSettings::new(&descriptor, MockPreferenceStore::builder().build());

        // Act
        let query = settings
            .add_query("My favorite cat wallpapers", "https://wallhaven.cc/search?q=cats")
            .unwrap();

        // Assert
        assert_eq!(query.url, "https://wallhaven.cc/search?q=cats");
        let raw = settings.store().value("wallhaven_queries").unwrap();
        assert!(raw.contains("My favorite cat wallpapers"));
        assert_eq!(settings.saved_queries().unwrap(), vec![query]);
    }

    #[test]
    fn given_short_description_when_adding_query_then_rejected() {
        let descriptor = wallhaven();
        let mut settings = BackendSettings::new(&descriptor, MockPreferenceStore::builder().build());

        let result = settings.add_query("Cats", "https://wallhaven.cc/search?q=cats");

        assert!(matches!(result, Err(DomainError::InvalidDescription)));
        assert_eq!(settings.store().write_count(), 0);
    }

    #[test]
    fn given_foreign_url_when_adding_query_then_rejected() {
        let descriptor = wallhaven();
        let mut settings = BackendSettings::new(&descriptor, MockPreferenceStore::builder().build());

        let result = settings.add_query("Evil wallpapers", "https://evil.cc/search");

        assert!(matches!(result, Err(DomainError::InvalidSearchUrl(_))));
    }

    #[test]
    fn given_saved_url_when_adding_again_then_rejected_as_duplicate() {
        let descriptor = wallhaven();
        let mut settings = BackendSettings::new(&descriptor, MockPreferenceStore::builder().build());
        settings
            .add_query("Cats everywhere", "https://wallhaven.cc/search?q=cats")
            .unwrap();

        let result = settings.add_query("Cats again", "https://wallhaven.cc/search?q=cats");

        assert!(matches!(result, Err(DomainError::DuplicateQuery(_))));
        assert_eq!(settings.saved_queries().unwrap().len(), 1);
    }

    #[test]
    fn given_two_queries_when_removing_first_then_second_remains() {
        // Arrange
        let descriptor = wallhaven();
        let mut settings = BackendSettings::new(&descriptor, MockPreferenceStore::builder().build());
        settings
            .add_query("Cats everywhere", "https://wallhaven.cc/search?q=cats")
            .unwrap();
        settings
            .add_query("Mountain views", "https://wallhaven.cc/api/v1/search?q=mountains")
            .unwrap();

        // Act
        let removed = settings.remove_query(0).unwrap();

        // Assert
        assert_eq!(removed.description, "Cats everywhere");
        let remaining = settings.saved_queries().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].description, "Mountain views");
    }

    #[test]
    fn given_out_of_range_index_when_removing_then_returns_error() {
        let descriptor = wallhaven();
        let mut settings = BackendSettings::new(&descriptor, MockPreferenceStore::builder().build());

        let result = settings.remove_query(3);

        match result.expect_err("Should return error") {
            DomainError::QueryIndexOutOfRange { index, len } => {
                assert_eq!(index, 3);
                assert_eq!(len, 0);
            }
            other => panic!("Expected QueryIndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn given_corrupt_json_when_listing_queries_then_returns_error() {
        let descriptor = wallhaven();
        let store = MockPreferenceStore::builder()
            .with_value("wallhaven_queries", "not json")
            .build();
        let settings = BackendSettings::new(&descriptor, store);

        let result = settings.saved_queries();

        assert!(matches!(
            result,
            Err(DomainError::CorruptPreference { key, .. }) if key == "wallhaven_queries"
        ));
    }

    #[test]
    fn given_failing_store_when_adding_query_then_storage_error_propagates() {
        let descriptor = wallhaven();
        let store = MockPreferenceStore::builder().with_failing_writes().build();
        let mut settings = BackendSettings::new(&descriptor, store);

        let result = settings.add_query("Cats everywhere", "https://wallhaven.cc/search?q=cats");

        assert!(matches!(result, Err(DomainError::Storage(_))));
    }

    #[test]
    fn given_hand_edited_invalid_entry_when_listing_then_skipped() {
        // Arrange
        let descriptor = wallhaven();
        let raw = r#"[
            {"description":"x","url":"http://evil.cc"},
            {"description":"Cats everywhere","url":"https://wallhaven.cc/search?q=cats"}
        ]"#;
        let store = MockPreferenceStore::builder()
            .with_value("wallhaven_queries", raw)
            .build();
        let mut settings = BackendSettings::new(&descriptor, store);

        // Act
        let queries = settings.saved_queries().unwrap();

        // Assert
        assert_eq!(
            queries,
            vec![SavedQuery::new("Cats everywhere", "https://wallhaven.cc/search?q=cats")]
        );
        settings
            .add_query("Mountain views", "https://wallhaven.cc/search?q=mountains")
            .unwrap();
        let rewritten = settings.store().value("wallhaven_queries").unwrap();
        assert!(!rewritten.contains("evil.cc"));
    }

    #[test]
    fn given_foreign_backend_value_when_reading_then_ignored() {
        let descriptor = wallhaven();
        let store = MockPreferenceStore::builder()
            .with_value("unsplash_api_key", VALID_KEY)
            .build();
        let settings = BackendSettings::new(&descriptor, store);

        assert_eq!(settings.api_key().unwrap(), None);
    }
}
