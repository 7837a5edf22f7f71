//! API response type definitions.

use serde::Deserialize;
use url::Url;

/// One page of an illust listing (bookmarks or author works).
#[derive(Debug, Deserialize)]
pub struct ListingPage {
    #[serde(default)]
    pub illusts: Vec<Illust>,

    /// Absolute URL of the next page, or null on the last page.
    #[serde(default)]
    pub next_url: Option<String>,
}

impl ListingPage {
    /// Extract the `max_bookmark_id` cursor from `next_url`.
    ///
    /// Bookmark listings paginate by handing back a fully-formed URL; only
    /// the cursor parameter is interesting, the rest is rebuilt locally.
    pub fn next_bookmark_cursor(&self) -> Option<String> {
        let next_url = self.next_url.as_deref()?;
        let url = Url::parse(next_url).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "max_bookmark_id")
            .map(|(_, value)| value.into_owned())
    }
}

/// A listed illustration.
#[derive(Debug, Clone, Deserialize)]
pub struct Illust {
    pub id: u64,
    pub title: String,
    pub create_date: String,
    pub user: IllustAuthor,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub meta_single_page: MetaSinglePage,
    #[serde(default)]
    pub meta_pages: Vec<MetaPage>,
}

impl Illust {
    /// Original-resolution image URLs, one per page.
    ///
    /// Single-page works carry their URL in `meta_single_page`; multi-page
    /// works list one entry per page in `meta_pages`.
    pub fn image_urls(&self) -> Vec<&str> {
        if let Some(url) = self.meta_single_page.original_image_url.as_deref() {
            vec![url]
        } else {
            self.meta_pages
                .iter()
                .map(|p| p.image_urls.original.as_str())
                .collect()
        }
    }

    /// Whether this work has more than one page image.
    pub fn is_multi_page(&self) -> bool {
        self.meta_single_page.original_image_url.is_none() && self.meta_pages.len() > 1
    }

    /// Author values the filter rules match against.
    pub fn author_values(&self) -> Vec<String> {
        vec![self.user.id.to_string(), self.user.name.clone()]
    }

    /// Tag values (names and translations) the filter rules match against.
    pub fn tag_values(&self) -> Vec<&str> {
        self.tags
            .iter()
            .flat_map(|t| {
                std::iter::once(t.name.as_str()).chain(t.translated_name.as_deref())
            })
            .collect()
    }
}

/// Author of an illustration.
#[derive(Debug, Clone, Deserialize)]
pub struct IllustAuthor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub account: String,
}

/// A tag with an optional translation.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub translated_name: Option<String>,
}

/// URL container for single-page works. Empty object for multi-page works.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaSinglePage {
    #[serde(default)]
    pub original_image_url: Option<String>,
}

/// One page of a multi-page work.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaPage {
    pub image_urls: PageImageUrls,
}

/// Per-page image URL variants. Only the original resolution is mirrored.
#[derive(Debug, Clone, Deserialize)]
pub struct PageImageUrls {
    pub original: String,
}

/// Error envelope the API returns with a 200 status.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_message: String,
}

impl ApiErrorDetail {
    /// Prefer the human-readable message, fall back to the technical one.
    pub fn display_message(&self) -> &str {
        if !self.user_message.is_empty() {
            &self.user_message
        } else {
            &self.message
        }
    }
}
