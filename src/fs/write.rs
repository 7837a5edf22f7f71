//! Atomic file writes.
//!
//! Everything lands via a `.part` sibling that is renamed into place once
//! fully written, so an interrupted run never leaves a final-named partial
//! file behind.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Minimum body size to show a progress bar (8 MB).
const PROGRESS_THRESHOLD: u64 = 8 * 1024 * 1024;

/// Temporary sibling path used during the write.
fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Write a byte buffer to `path` via temp-then-rename.
pub async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = part_path(path);

    let mut file = File::create(&tmp).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    drop(file);

    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// Stream an HTTP response body to `path` via temp-then-rename.
///
/// Returns the number of bytes written. A failed stream removes the
/// temporary file and leaves nothing at `path`.
pub async fn stream_to_file(response: Response, path: &Path, show_progress: bool) -> Result<u64> {
    let tmp = part_path(path);

    let content_length = response.content_length();
    let progress = if show_progress
        && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false)
    {
        let pb = ProgressBar::new(content_length.unwrap_or(0));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut file = File::create(&tmp).await?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => {
                drop(file);
                let _ = tokio::fs::remove_file(&tmp).await;
                return Err(Error::Api(format!("Stream error: {}", e)));
            }
        };
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(written);
        }
    }

    file.flush().await?;
    drop(file);

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    tokio::fs::rename(&tmp, path).await?;
    Ok(written)
}
