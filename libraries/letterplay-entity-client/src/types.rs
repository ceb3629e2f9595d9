//! Types for entity store requests.

/// Configuration for connecting to the hosted entity store.
///
/// The credential is a static API key sent as a request header; there is
/// no login flow and no token refresh.
#[derive(Debug, Clone)]
pub struct EntityConfig {
    /// Base URL of the service (e.g. "https://app.base44.com")
    pub base_url: String,
    /// Application id under which the entities live
    pub app_id: String,
    /// Static API key credential
    pub api_key: String,
}

impl EntityConfig {
    /// Create a new entity store config.
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            app_id: app_id.into(),
            api_key: api_key.into(),
        }
    }
}
