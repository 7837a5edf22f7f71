//! Metadata sidecar records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::Illust;

/// Contents of the `<illust_id>.json` sidecar written next to the images.
#[derive(Debug, Serialize, Deserialize)]
pub struct IllustRecord {
    pub id: u64,
    pub title: String,
    pub create_date: String,
    pub author_id: u64,
    pub author_name: String,
    pub tags: Vec<TagRecord>,
    pub width: u32,
    pub height: u32,
    pub page_count: u32,
    /// Source URLs of the mirrored images, in page order.
    pub source_urls: Vec<String>,
    /// When this artifact was fetched, UTC.
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl IllustRecord {
    pub fn from_illust(illust: &Illust) -> Self {
        Self {
            id: illust.id,
            title: illust.title.clone(),
            create_date: illust.create_date.clone(),
            author_id: illust.user.id,
            author_name: illust.user.name.clone(),
            tags: illust
                .tags
                .iter()
                .map(|t| TagRecord {
                    name: t.name.clone(),
                    translation: t.translated_name.clone(),
                })
                .collect(),
            width: illust.width,
            height: illust.height,
            page_count: illust.page_count,
            source_urls: illust.image_urls().iter().map(|u| u.to_string()).collect(),
            fetched_at: Utc::now(),
        }
    }

    /// Author values the filter rules match against.
    pub fn author_values(&self) -> Vec<String> {
        vec![self.author_id.to_string(), self.author_name.clone()]
    }

    /// Tag values (names and translations) the filter rules match against.
    pub fn tag_values(&self) -> Vec<&str> {
        self.tags
            .iter()
            .flat_map(|t| std::iter::once(t.name.as_str()).chain(t.translation.as_deref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_illust() {
        let illust: Illust = serde_json::from_value(serde_json::json!({
            "id": 111,
            "title": "morning",
            "create_date": "2024-01-01T00:00:00+09:00",
            "user": {"id": 42, "name": "artist"},
            "tags": [{"name": "風景", "translated_name": "scenery"}],
            "page_count": 1,
            "width": 800,
            "height": 600,
            "meta_single_page": {"original_image_url": "https://i.pximg.net/img/111_p0.png"},
        }))
        .unwrap();

        let record = IllustRecord::from_illust(&illust);
        assert_eq!(record.id, 111);
        assert_eq!(record.author_name, "artist");
        assert_eq!(record.tags.len(), 1);
        assert_eq!(record.tags[0].translation.as_deref(), Some("scenery"));
        assert_eq!(
            record.source_urls,
            vec!["https://i.pximg.net/img/111_p0.png".to_string()]
        );
    }
}
