//! Author target sync.

use regex::Regex;

use crate::api::PixivClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::sync::item::process_illust;
use crate::sync::state::TargetStats;

/// Resolve a configured author target into a numeric author ID.
///
/// Accepts a raw numeric ID or a profile URL like
/// `https://www.pixiv.net/users/104571`.
pub fn resolve_author_id(input: &str) -> Result<u64> {
    let patterns = [
        Regex::new(r"^(\d+)$").unwrap(),
        Regex::new(r"^https?://www\.pixiv\.net/users/(\d+)(?:/.*)?$").unwrap(),
    ];

    for pattern in &patterns {
        if let Some(captures) = pattern.captures(input.trim()) {
            if let Ok(id) = captures[1].parse() {
                return Ok(id);
            }
        }
    }

    Err(Error::ConfigValidation {
        field: "authors".to_string(),
        message: format!("No author ID can be recognized from: {}", input),
    })
}

/// Sync every illust of one author.
///
/// Author listings are paged by offset and re-scanned fully on every run;
/// skip-if-exists keeps the re-scan cheap. The stop-on-known shortcut does
/// not apply here since author listings can gain items anywhere when works
/// are deleted and re-uploaded.
pub async fn sync_author(
    config: &Config,
    client: &PixivClient,
    author: &str,
    stats: &mut TargetStats,
) -> Result<()> {
    let author_id = resolve_author_id(author)?;
    let mut offset: u32 = 0;

    loop {
        tracing::debug!("Fetching author {} page (offset: {})", author_id, offset);

        let page = client.user_illusts(author_id, offset).await?;

        if page.illusts.is_empty() {
            break;
        }

        for illust in &page.illusts {
            process_illust(config, client, stats, illust).await;
        }

        offset += page.illusts.len() as u32;
    }

    Ok(())
}
