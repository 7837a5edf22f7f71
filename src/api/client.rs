//! Pixiv API HTTP client.

use reqwest::{header, Client, Response};

use crate::api::types::{ApiErrorBody, ListingPage};
use crate::error::{Error, Result};

/// Pixiv app API base URL.
const API_BASE: &str = "https://app-api.pixiv.net";

/// Referer the image CDN requires; requests without it get a 403.
const IMAGE_REFERER: &str = "https://app-api.pixiv.net/";

/// User agent of the official app the API expects.
const USER_AGENT: &str = "PixivAndroidApp/5.0.234 (Android 11; Pixel 5)";

/// Pixiv API client carrying the session token.
pub struct PixivClient {
    client: Client,
    token: String,
    base_url: String,
}

impl PixivClient {
    /// Create a client against the production API.
    pub fn new(token: String) -> Result<Self> {
        Self::with_base_url(token, API_BASE)
    }

    /// Create a client against an arbitrary base URL (used by tests).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            token: token.into(),
            base_url: base_url.into(),
        })
    }

    /// Make an authenticated GET request against the API.
    async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == 401 || status == 403 {
            return Err(Error::AuthExpired(format!("HTTP {}", status)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() { "request failed" } else { &body }
            )));
        }

        Ok(response)
    }

    /// Parse a listing page, surfacing the API's in-band error envelope.
    fn parse_listing(text: &str) -> Result<ListingPage> {
        if let Ok(body) = serde_json::from_str::<ApiErrorBody>(text) {
            return Err(Error::Api(body.error.display_message().to_string()));
        }

        serde_json::from_str(text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse listing: {} - Response: {}",
                e,
                truncate_at_char_boundary(text, 500)
            ))
        })
    }

    /// Get one page of the user's bookmarked illusts, newest first.
    pub async fn user_bookmarks(
        &self,
        user_id: u64,
        restrict: &str,
        max_bookmark_id: Option<&str>,
    ) -> Result<ListingPage> {
        let mut path = format!(
            "/v1/user/bookmarks/illust?user_id={}&restrict={}",
            user_id, restrict
        );
        if let Some(cursor) = max_bookmark_id {
            path.push_str(&format!("&max_bookmark_id={}", cursor));
        }

        let response = self.get(&path).await?;
        let text = response.text().await?;
        Self::parse_listing(&text)
    }

    /// Get one page of an author's illusts, paged by offset.
    pub async fn user_illusts(&self, author_id: u64, offset: u32) -> Result<ListingPage> {
        let path = format!(
            "/v1/user/illusts?user_id={}&type=illust&offset={}",
            author_id, offset
        );

        let response = self.get(&path).await?;
        let text = response.text().await?;
        Self::parse_listing(&text)
    }

    /// Download an image asset from its full URL.
    ///
    /// Asset URLs point at the image CDN, not the API host, so this request
    /// carries the referer header instead of the authorization token.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(header::REFERER, IMAGE_REFERER)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

/// Truncate to at most `max` bytes without splitting a character.
fn truncate_at_char_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
