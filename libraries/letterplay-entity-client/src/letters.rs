//! Operations on the Letter entity collection.

use crate::error::{EntityClientError, Result};
use letterplay_core::types::{Letter, LetterId, UpdateLetter};
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Request header carrying the static credential.
const API_KEY_HEADER: &str = "api_key";

/// Server-side filter over the Letter collection.
///
/// Every field the service indexes can be matched exactly; unset fields
/// do not constrain the query.
#[derive(Debug, Clone, Default)]
pub struct LetterFilter {
    letter: Option<String>,
    name: Option<String>,
    word: Option<String>,
    icon: Option<String>,
    sound_effect: Option<String>,
    writing_path: Option<String>,
}

impl LetterFilter {
    /// Create an empty filter (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Match on the letter glyph.
    pub fn letter(mut self, value: impl Into<String>) -> Self {
        self.letter = Some(value.into());
        self
    }

    /// Match on the spoken name.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Match on the example word.
    pub fn word(mut self, value: impl Into<String>) -> Self {
        self.word = Some(value.into());
        self
    }

    /// Match on the icon asset.
    pub fn icon(mut self, value: impl Into<String>) -> Self {
        self.icon = Some(value.into());
        self
    }

    /// Match on the sound effect URL.
    pub fn sound_effect(mut self, value: impl Into<String>) -> Self {
        self.sound_effect = Some(value.into());
        self
    }

    /// Match on the tracing path data.
    pub fn writing_path(mut self, value: impl Into<String>) -> Self {
        self.writing_path = Some(value.into());
        self
    }

    /// Whether any constraint is set.
    pub fn is_empty(&self) -> bool {
        self.as_query().is_empty()
    }

    fn as_query(&self) -> Vec<(&'static str, &str)> {
        let mut query = Vec::new();
        if let Some(v) = &self.letter {
            query.push(("letter", v.as_str()));
        }
        if let Some(v) = &self.name {
            query.push(("name", v.as_str()));
        }
        if let Some(v) = &self.word {
            query.push(("word", v.as_str()));
        }
        if let Some(v) = &self.icon {
            query.push(("icon", v.as_str()));
        }
        if let Some(v) = &self.sound_effect {
            query.push(("sound_effect", v.as_str()));
        }
        if let Some(v) = &self.writing_path {
            query.push(("writing_path", v.as_str()));
        }
        query
    }
}

/// Client for the Letter collection.
pub struct LettersClient<'a> {
    http: &'a Client,
    api_base: &'a str,
    api_key: &'a str,
}

impl<'a> LettersClient<'a> {
    pub(crate) fn new(http: &'a Client, api_base: &'a str, api_key: &'a str) -> Self {
        Self {
            http,
            api_base,
            api_key,
        }
    }

    /// Fetch the whole Letter collection.
    pub async fn list(&self) -> Result<Vec<Letter>> {
        let url = format!("{}/entities/Letter", self.api_base);
        debug!(url = %url, "Fetching letters");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            let letters: Vec<Letter> = response.json().await.map_err(|e| {
                EntityClientError::ParseError(format!("Failed to parse letter list: {}", e))
            })?;

            debug!(count = letters.len(), "Fetched letters");

            Ok(letters)
        } else {
            Err(error_for_status(response, status, None).await)
        }
    }

    /// Fetch letters matching a server-side filter.
    pub async fn list_filtered(&self, filter: &LetterFilter) -> Result<Vec<Letter>> {
        let url = format!("{}/entities/Letter", self.api_base);
        debug!(url = %url, filter = ?filter, "Fetching filtered letters");

        let response = self
            .http
            .get(&url)
            .query(&filter.as_query())
            .header(API_KEY_HEADER, self.api_key)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            let letters: Vec<Letter> = response.json().await.map_err(|e| {
                EntityClientError::ParseError(format!("Failed to parse letter list: {}", e))
            })?;

            debug!(count = letters.len(), "Fetched filtered letters");

            Ok(letters)
        } else {
            Err(error_for_status(response, status, None).await)
        }
    }

    /// Fetch a single letter by id.
    pub async fn get(&self, id: &LetterId) -> Result<Letter> {
        let url = format!("{}/entities/Letter/{}", self.api_base, id);
        debug!(url = %url, "Fetching letter");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                EntityClientError::ParseError(format!("Failed to parse letter: {}", e))
            })
        } else {
            Err(error_for_status(response, status, Some(id)).await)
        }
    }

    /// Update a letter, sending only the fields set in `update`.
    ///
    /// Returns the record as stored after the update.
    pub async fn update(&self, id: &LetterId, update: &UpdateLetter) -> Result<Letter> {
        let url = format!("{}/entities/Letter/{}", self.api_base, id);
        debug!(url = %url, "Updating letter");

        let response = self
            .http
            .put(&url)
            .header(API_KEY_HEADER, self.api_key)
            .json(update)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            let letter: Letter = response.json().await.map_err(|e| {
                EntityClientError::ParseError(format!("Failed to parse updated letter: {}", e))
            })?;

            debug!(id = %letter.id, "Updated letter");

            Ok(letter)
        } else {
            Err(error_for_status(response, status, Some(id)).await)
        }
    }
}

/// Map transport failures to the taxonomy: connection and timeout
/// problems are "unreachable", everything else stays a request error.
fn map_send_error(e: reqwest::Error) -> EntityClientError {
    if e.is_connect() || e.is_timeout() {
        EntityClientError::ServerUnreachable(e.to_string())
    } else {
        EntityClientError::Request(e)
    }
}

/// Turn a non-2xx response into a typed error.
async fn error_for_status(
    response: reqwest::Response,
    status: StatusCode,
    id: Option<&LetterId>,
) -> EntityClientError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return EntityClientError::AuthRejected;
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return EntityClientError::NotFound {
                entity: "Letter".to_string(),
                id: id.to_string(),
            };
        }
    }

    let message = response.text().await.unwrap_or_default();
    EntityClientError::ServerError {
        status: status.as_u16(),
        message,
    }
}
