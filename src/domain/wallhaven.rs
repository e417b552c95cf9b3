// src/domain/wallhaven.rs
use crate::domain::BackendDefinition;

/// wallhaven.cc
///
/// API keys are 32 alphanumeric characters. Saved searches may point at the
/// human search page or the JSON API path; the query string is limited to
/// URL-safe characters.
pub const WALLHAVEN: BackendDefinition = BackendDefinition {
    service_name: "wallhaven",
    display_name: "Wallhaven",
    queries_suffix: "queries",
    api_key_suffix: "api_key",
    api_key_pattern: r"[a-zA-Z0-9]{32}",
    search_url_pattern: r"https://wallhaven\.cc/(?:api/v1/)?search(?:\?[a-zA-Z0-9_\-.~!$&'()*+,;=:@/?%]*)?",
    description_pattern: r"[^\x00-\x1F\x7F]{5,150}",
    key_test_endpoint: "https://wallhaven.cc/api/v1/settings?apikey=",
};
