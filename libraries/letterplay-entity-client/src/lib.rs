//! Letterplay Entity Store Client
//!
//! HTTP client library for the hosted backend-as-a-service entity store
//! holding the app's `Letter` records.
//!
//! # Features
//!
//! - **Read**: Fetch the whole alphabet, or filter on any indexed field
//! - **Update**: Partial updates carrying only the changed fields
//! - **Static credential**: A fixed API key header; no login flow
//!
//! # Example
//!
//! ```ignore
//! use letterplay_entity_client::{EntityClient, EntityConfig, LetterFilter};
//! use letterplay_core::types::UpdateLetter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client
//!     let config = EntityConfig::new("https://app.base44.com", "app123", "key456");
//!     let client = EntityClient::new(config)?;
//!
//!     // Fetch the alphabet
//!     let letters = client.letters().list().await?;
//!     println!("Found {} letters", letters.len());
//!
//!     // Find the record for "A"
//!     let a = client
//!         .letters()
//!         .list_filtered(&LetterFilter::new().letter("A"))
//!         .await?;
//!
//!     // Point it at a new pronunciation asset
//!     let update = UpdateLetter {
//!         sound_effect: Some("https://cdn.example.com/sounds/a.mp3".to_string()),
//!         ..UpdateLetter::default()
//!     };
//!     client.letters().update(&a[0].id, &update).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod letters;
mod types;

// Re-export main types
pub use client::EntityClient;
pub use error::{EntityClientError, Result};
pub use letters::{LetterFilter, LettersClient};
pub use types::EntityConfig;

// Re-export the domain types the client traffics in
pub use letterplay_core::types::{Letter, LetterId, UpdateLetter};
