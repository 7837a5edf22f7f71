//! Bookmark collection sync.

use crate::api::PixivClient;
use crate::config::{BookmarkVisibility, Config};
use crate::error::{Error, Result};
use crate::sync::item::{process_illust, ItemOutcome};
use crate::sync::state::TargetStats;

/// Sync one bookmark collection (public or private).
///
/// Pages newest-first via the `max_bookmark_id` cursor. With
/// `stop_on_known` set, paging stops at the first already-local illust:
/// the listing is reverse-chronological, so everything beyond it was
/// handled by an earlier run.
pub async fn sync_bookmarks(
    config: &Config,
    client: &PixivClient,
    visibility: BookmarkVisibility,
    stats: &mut TargetStats,
) -> Result<()> {
    let user_id = config.user_id.ok_or_else(|| Error::ConfigValidation {
        field: "user_id".to_string(),
        message: "user_id is required for bookmark sync".to_string(),
    })?;

    let mut cursor: Option<String> = None;

    loop {
        tracing::debug!(
            "Fetching bookmarks/{} page (cursor: {})",
            visibility,
            cursor.as_deref().unwrap_or("start")
        );

        let page = client
            .user_bookmarks(user_id, visibility.restrict(), cursor.as_deref())
            .await?;

        if page.illusts.is_empty() {
            tracing::debug!("Empty page, bookmark listing exhausted");
            break;
        }

        for illust in &page.illusts {
            let outcome = process_illust(config, client, stats, illust).await;

            if outcome == ItemOutcome::AlreadyLocal && config.options.stop_on_known {
                tracing::debug!(
                    "Known illust {} reached, stopping bookmarks/{}",
                    illust.id,
                    visibility
                );
                return Ok(());
            }
        }

        cursor = match page.next_bookmark_cursor() {
            Some(next) => Some(next),
            None => break,
        };
    }

    Ok(())
}
