//! Local library scanning for the `count` subcommand.

use std::path::Path;

use crate::error::Result;

/// Counts of locally mirrored artifacts.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LibraryCounts {
    /// Author directories directly under the download root.
    pub authors: u64,
    /// Metadata sidecars, one per synced illust.
    pub illusts: u64,
    /// Image files.
    pub images: u64,
    /// Leftover `.part` files from interrupted runs.
    pub partial: u64,
}

/// Walk the download directory and count artifacts.
///
/// A missing download directory is an empty library, not an error.
pub fn scan_library(root: &Path) -> Result<LibraryCounts> {
    let mut counts = LibraryCounts::default();

    if !root.is_dir() {
        return Ok(counts);
    }

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            counts.authors += 1;
            scan_dir(&entry.path(), &mut counts)?;
        }
    }

    Ok(counts)
}

fn scan_dir(dir: &Path, counts: &mut LibraryCounts) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            // Multi-page illust subdirectory
            scan_dir(&path, counts)?;
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();

        if name.ends_with(".part") {
            counts.partial += 1;
        } else if is_sidecar(&name) {
            counts.illusts += 1;
        } else {
            counts.images += 1;
        }
    }
    Ok(())
}

/// Sidecars are named `<illust_id>.json` with a purely numeric stem.
fn is_sidecar(name: &str) -> bool {
    name.strip_suffix(".json")
        .map(|stem| !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}
