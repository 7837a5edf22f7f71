//! Per-illust processing: filter, presence check, fetch, write.

use crate::api::{Illust, PixivClient};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::{illust_dir, image_filename, is_local, sidecar_path, stream_to_file, write_atomic};
use crate::sync::metadata::IllustRecord;
use crate::sync::state::TargetStats;

/// What happened to one listed illust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    Downloaded,
    AlreadyLocal,
    Excluded,
    Failed,
}

/// Process one listed illust and record the outcome in `stats`.
///
/// Item-level failures are logged and absorbed here; only the outcome is
/// reported so the listing loop keeps going (per-item errors never abort
/// the run).
pub async fn process_illust(
    config: &Config,
    client: &PixivClient,
    stats: &mut TargetStats,
    illust: &Illust,
) -> ItemOutcome {
    let authors = illust.author_values();
    let author_refs: Vec<&str> = authors.iter().map(String::as_str).collect();
    if config.filters.is_excluded(&author_refs, &illust.tag_values()) {
        tracing::debug!("Excluded by filters: {} ({})", illust.id, illust.title);
        stats.excluded += 1;
        return ItemOutcome::Excluded;
    }

    match is_local(config, illust) {
        Ok(true) => {
            if config.options.show_skipped {
                tracing::info!("Already local: {} ({})", illust.id, illust.title);
            }
            stats.already_local += 1;
            return ItemOutcome::AlreadyLocal;
        }
        Ok(false) => {}
        Err(e) => {
            tracing::warn!("Cannot derive local path for {}: {}", illust.id, e);
            stats.failed_items += 1;
            return ItemOutcome::Failed;
        }
    }

    match download_illust(config, client, illust).await {
        Ok(()) => {
            tracing::info!("Downloaded: {} ({})", illust.id, illust.title);
            stats.downloaded += 1;
            ItemOutcome::Downloaded
        }
        Err(e) => {
            tracing::warn!("{}", e);
            stats.failed_items += 1;
            ItemOutcome::Failed
        }
    }
}

/// Fetch all page images and the metadata sidecar for one illust.
///
/// The sidecar is written last: its presence marks the artifact complete,
/// so an interruption anywhere before that retries the whole item on the
/// next run.
async fn download_illust(config: &Config, client: &PixivClient, illust: &Illust) -> Result<()> {
    let illust_id = illust.id.to_string();
    let root = config.download_dir.as_path();

    let dir = illust_dir(root, illust)?;
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| Error::item_fetch(&illust_id, format!("create {}: {}", dir.display(), e)))?;

    for url in illust.image_urls() {
        let path = dir.join(image_filename(url)?);
        if path.exists() {
            // Left over from an interrupted run; the sidecar was never
            // written, so the image itself may still be trusted as complete
            // (renames are atomic).
            continue;
        }

        let response = client
            .download_file(url)
            .await
            .map_err(|e| Error::item_fetch(&illust_id, format!("{}: {}", url, e)))?;

        stream_to_file(response, &path, true)
            .await
            .map_err(|e| Error::item_fetch(&illust_id, format!("write {}: {}", path.display(), e)))?;

        tracing::debug!("Wrote {}", path.display());
    }

    if config.options.write_metadata {
        let record = IllustRecord::from_illust(illust);
        let bytes = serde_json::to_vec_pretty(&record)?;
        let path = sidecar_path(root, illust)?;
        write_atomic(&path, &bytes)
            .await
            .map_err(|e| Error::item_fetch(&illust_id, format!("write {}: {}", path.display(), e)))?;
    }

    Ok(())
}
