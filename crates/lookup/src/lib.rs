//! HTTP client for the public Digimon lookup API.
//!
//! Resolves a representative image URL for a Digimon by name, using
//! [`reqwest`]. Lookup failure of any kind -- network error, non-success
//! status, empty result, malformed body -- degrades to "no image" and
//! never fails the caller's operation. No retries, no caching.

use serde::Deserialize;

/// Default base URL of the public lookup API.
pub const DEFAULT_BASE_URL: &str = "https://digimon.shadowsmith.com/api";

/// HTTP client for the Digimon lookup API.
pub struct LookupClient {
    client: reqwest::Client,
    base_url: String,
}

/// One entry from the lookup API's by-name response.
///
/// The API returns a sequence of objects; only `img` is of interest and
/// it may be missing.
#[derive(Debug, Deserialize)]
pub struct LookupEntry {
    #[serde(default)]
    pub img: Option<String>,
}

/// Errors from the lookup layer. Fully absorbed by
/// [`LookupClient::image_for`]; kept as a type so failures log cleanly.
#[derive(Debug, thiserror::Error)]
enum LookupError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The lookup API returned a non-2xx status code.
    #[error("Lookup API error ({status})")]
    Status { status: u16 },
}

impl LookupClient {
    /// Create a new client for the given base URL, e.g.
    /// `https://digimon.shadowsmith.com/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resolve an image URL for `name`, or `None` when the lookup fails
    /// or has no image for it.
    ///
    /// The name is lowercased before querying. This is the one outbound
    /// call in the create/update pipeline; total failure here must not
    /// abort the request, so every error path returns `None`.
    pub async fn image_for(&self, name: &str) -> Option<String> {
        match self.fetch_entries(name).await {
            Ok(entries) => first_image(entries),
            Err(err) => {
                tracing::debug!(name, error = %err, "Image lookup failed");
                None
            }
        }
    }

    /// Query the by-name endpoint and parse the entry list.
    async fn fetch_entries(&self, name: &str) -> Result<Vec<LookupEntry>, LookupError> {
        let url = format!("{}/digimon/name/{}", self.base_url, name.to_lowercase());
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LookupError::Status {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Extract the first entry's image URL, if it carries one.
///
/// Only the first entry counts; an empty `img` is treated as absent.
fn first_image(entries: Vec<LookupEntry>) -> Option<String> {
    entries
        .into_iter()
        .next()
        .and_then(|entry| entry.img)
        .filter(|img| !img.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entries_from(value: serde_json::Value) -> Vec<LookupEntry> {
        serde_json::from_value(value).expect("entries should deserialize")
    }

    #[test]
    fn first_image_picks_first_entry() {
        let entries = entries_from(json!([
            {"name": "Agumon", "img": "https://example.com/agumon.jpg"},
            {"name": "Agumon X", "img": "https://example.com/agumon-x.jpg"},
        ]));
        assert_eq!(
            first_image(entries).as_deref(),
            Some("https://example.com/agumon.jpg")
        );
    }

    #[test]
    fn first_image_empty_response_is_none() {
        assert_eq!(first_image(entries_from(json!([]))), None);
    }

    #[test]
    fn first_image_entry_without_img_is_none() {
        // No fallback to later entries: only the first one counts.
        let entries = entries_from(json!([
            {"name": "Agumon"},
            {"name": "Agumon X", "img": "https://example.com/agumon-x.jpg"},
        ]));
        assert_eq!(first_image(entries), None);
    }

    #[test]
    fn first_image_empty_url_is_none() {
        let entries = entries_from(json!([{"img": ""}]));
        assert_eq!(first_image(entries), None);
    }

    #[tokio::test]
    async fn image_for_unreachable_host_is_none() {
        // Connection refused must degrade to "no image", not an error.
        let client = LookupClient::new("http://127.0.0.1:9");
        assert_eq!(client.image_for("Agumon").await, None);
    }
}
