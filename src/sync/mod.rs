//! The sync loop.
//!
//! Single-threaded and strictly sequential: one listing request or asset
//! download in flight at a time, one file written at a time. A listing
//! failure is fatal for its collection only; remaining collections still
//! run and previously written artifacts stay on disk.

pub mod authors;
pub mod bookmarks;
pub mod item;
pub mod metadata;
pub mod state;

pub use authors::{resolve_author_id, sync_author};
pub use bookmarks::sync_bookmarks;
pub use item::{process_illust, ItemOutcome};
pub use metadata::IllustRecord;
pub use state::{GlobalStats, TargetStats};

use crate::api::PixivClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::print_target_stats;

/// Run a full sync over every configured target.
///
/// Fails up front with `MissingCredential` before any network call if no
/// token is configured. Per-target listing failures are recorded in the
/// returned stats rather than propagated, so one expired collection does
/// not keep the others from syncing.
pub async fn run_sync(config: &Config, client: &PixivClient) -> Result<GlobalStats> {
    if config.token().is_none() {
        return Err(Error::MissingCredential);
    }

    if !config.has_targets() {
        tracing::warn!("No bookmark or author targets configured, nothing to sync");
    }

    let mut global = GlobalStats::default();

    for visibility in &config.bookmarks {
        let mut stats = TargetStats::new(format!("bookmarks/{}", visibility));
        tracing::info!("Syncing {}", stats.target);

        match sync_bookmarks(config, client, *visibility, &mut stats).await {
            Ok(()) => {
                print_target_stats(&stats);
                global.add_target(&stats);
            }
            Err(e) => {
                tracing::error!("Failed to sync {}: {}", stats.target, e);
                global.add_failed_target(&stats, &e.to_string());
            }
        }
    }

    for author in &config.authors {
        let mut stats = TargetStats::new(format!("author/{}", author));
        tracing::info!("Syncing {}", stats.target);

        match sync_author(config, client, author, &mut stats).await {
            Ok(()) => {
                print_target_stats(&stats);
                global.add_target(&stats);
            }
            Err(e) => {
                tracing::error!("Failed to sync {}: {}", stats.target, e);
                global.add_failed_target(&stats, &e.to_string());
            }
        }
    }

    Ok(global)
}
