//! Main entity store client.

use crate::error::{EntityClientError, Result};
use crate::letters::LettersClient;
use crate::types::EntityConfig;
use reqwest::Client;
use std::time::Duration;

/// Client for the hosted entity store.
///
/// Holds the HTTP connection pool and the static credential; entity
/// collections are reached through borrowed sub-clients.
///
/// # Example
///
/// ```ignore
/// use letterplay_entity_client::{EntityClient, EntityConfig};
///
/// // Create client
/// let config = EntityConfig::new("https://app.base44.com", "app123", "key456");
/// let client = EntityClient::new(config)?;
///
/// // Fetch the alphabet
/// let letters = client.letters().list().await?;
/// println!("Found {} letters", letters.len());
/// ```
pub struct EntityClient {
    http: Client,
    api_base: String,
    api_key: String,
}

impl EntityClient {
    /// Create a new client with the given configuration.
    pub fn new(config: EntityConfig) -> Result<Self> {
        // Validate URL
        if config.base_url.is_empty() {
            return Err(EntityClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(EntityClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        if config.app_id.is_empty() {
            return Err(EntityClientError::InvalidUrl(
                "App id cannot be empty".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Letterplay/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(EntityClientError::Request)?;

        Ok(Self {
            http,
            api_base: format!("{}/api/apps/{}", base_url, config.app_id),
            api_key: config.api_key,
        })
    }

    /// The resolved API base URL (scheme + host + app path).
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Get a client for the Letter collection.
    pub fn letters(&self) -> LettersClient<'_> {
        LettersClient::new(&self.http, &self.api_base, &self.api_key)
    }
}
