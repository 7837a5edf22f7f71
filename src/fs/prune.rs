//! Removal of mirrored artifacts (`remove` and `remove-excluded`).
//!
//! The metadata sidecar is the source of truth here: it names the source
//! URLs (and therefore the local image filenames) of its illust, so an
//! artifact can be deleted whole without a database. Libraries written
//! with `write_metadata: false` have no sidecars and nothing to prune.

use std::path::{Path, PathBuf};

use crate::config::Filters;
use crate::error::Result;
use crate::fs::layout::image_filename;
use crate::sync::metadata::IllustRecord;

/// A mirrored illust located on disk via its sidecar.
#[derive(Debug)]
pub struct LocalArtifact {
    pub record: IllustRecord,
    /// Path of the `<illust_id>.json` sidecar.
    pub sidecar: PathBuf,
}

impl LocalArtifact {
    /// Directory holding the sidecar and the page images.
    fn dir(&self) -> &Path {
        self.sidecar.parent().unwrap_or(Path::new("."))
    }

    /// Whether the exclusion filters drop this artifact.
    pub fn is_excluded(&self, filters: &Filters) -> bool {
        let authors = self.record.author_values();
        let author_refs: Vec<&str> = authors.iter().map(String::as_str).collect();
        filters.is_excluded(&author_refs, &self.record.tag_values())
    }
}

/// Walk the download directory and collect every artifact with a sidecar.
///
/// Sidecars that fail to parse are logged and skipped; they stay on disk.
pub fn find_artifacts(root: &Path) -> Result<Vec<LocalArtifact>> {
    let mut artifacts = Vec::new();

    if !root.is_dir() {
        return Ok(artifacts);
    }

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            collect_sidecars(&entry.path(), &mut artifacts)?;
        }
    }

    artifacts.sort_by_key(|a| a.record.id);
    Ok(artifacts)
}

fn collect_sidecars(dir: &Path, artifacts: &mut Vec<LocalArtifact>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            collect_sidecars(&path, artifacts)?;
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !is_sidecar_name(&name) {
            continue;
        }

        match std::fs::read(&path)
            .map_err(crate::error::Error::Io)
            .and_then(|bytes| serde_json::from_slice(&bytes).map_err(Into::into))
        {
            Ok(record) => artifacts.push(LocalArtifact {
                record,
                sidecar: path,
            }),
            Err(e) => {
                tracing::warn!("Skipping unreadable sidecar {}: {}", path.display(), e);
            }
        }
    }
    Ok(())
}

fn is_sidecar_name(name: &str) -> bool {
    name.strip_suffix(".json")
        .map(|stem| !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}

/// Delete an artifact: its page images, its sidecar, and (for multi-page
/// works) its per-illust subdirectory. Returns the number of files removed.
pub fn remove_artifact(artifact: &LocalArtifact) -> Result<u64> {
    let dir = artifact.dir();
    let mut removed = 0u64;

    for url in &artifact.record.source_urls {
        let path = match image_filename(url) {
            Ok(name) => dir.join(name),
            Err(e) => {
                tracing::warn!("Cannot derive filename from {}: {}", url, e);
                continue;
            }
        };
        if path.exists() {
            std::fs::remove_file(&path)?;
            removed += 1;
            tracing::debug!("Removed {}", path.display());
        }
    }

    std::fs::remove_file(&artifact.sidecar)?;
    removed += 1;

    // Multi-page works own their directory; take it out with whatever is
    // left inside (e.g. stray .part files).
    if dir.file_name().map(|n| n.to_string_lossy() == artifact.record.id.to_string())
        == Some(true)
    {
        std::fs::remove_dir_all(dir)?;
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleSet;
    use crate::sync::metadata::TagRecord;
    use tempfile::{tempdir, TempDir};

    fn make_record(id: u64, author: &str, tags: &[&str], urls: &[&str]) -> IllustRecord {
        IllustRecord {
            id,
            title: format!("illust {}", id),
            create_date: "2024-01-01T00:00:00+09:00".to_string(),
            author_id: 42,
            author_name: author.to_string(),
            tags: tags
                .iter()
                .map(|t| TagRecord {
                    name: t.to_string(),
                    translation: None,
                })
                .collect(),
            width: 800,
            height: 600,
            page_count: urls.len() as u32,
            source_urls: urls.iter().map(|u| u.to_string()).collect(),
            fetched_at: chrono::Utc::now(),
        }
    }

    /// Library with a single-page illust 111 and a multi-page illust 222.
    fn make_library() -> TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();

        let single = make_record(
            111,
            "artist",
            &["scenery"],
            &["https://i.pximg.net/img/111_p0.png"],
        );
        std::fs::create_dir_all(root.join("artist")).unwrap();
        std::fs::write(root.join("artist/111_p0.png"), b"img").unwrap();
        std::fs::write(
            root.join("artist/111.json"),
            serde_json::to_vec(&single).unwrap(),
        )
        .unwrap();

        let multi = make_record(
            222,
            "artist",
            &["portrait"],
            &[
                "https://i.pximg.net/img/222_p0.png",
                "https://i.pximg.net/img/222_p1.png",
            ],
        );
        std::fs::create_dir_all(root.join("artist/222")).unwrap();
        std::fs::write(root.join("artist/222/222_p0.png"), b"img").unwrap();
        std::fs::write(root.join("artist/222/222_p1.png"), b"img").unwrap();
        std::fs::write(
            root.join("artist/222/222.json"),
            serde_json::to_vec(&multi).unwrap(),
        )
        .unwrap();

        dir
    }

    #[test]
    fn test_find_artifacts() {
        let dir = make_library();
        let artifacts = find_artifacts(dir.path()).unwrap();

        let ids: Vec<u64> = artifacts.iter().map(|a| a.record.id).collect();
        assert_eq!(ids, vec![111, 222]);
    }

    #[test]
    fn test_find_artifacts_missing_root() {
        let artifacts = find_artifacts(Path::new("/nonexistent/library")).unwrap();
        assert!(artifacts.is_empty());
    }

    #[test]
    fn test_find_artifacts_skips_unparseable_sidecar() {
        let dir = make_library();
        std::fs::write(dir.path().join("artist/333.json"), b"not json").unwrap();

        let artifacts = find_artifacts(dir.path()).unwrap();
        assert_eq!(artifacts.len(), 2);
        // The broken sidecar is left alone
        assert!(dir.path().join("artist/333.json").exists());
    }

    #[test]
    fn test_remove_single_page_artifact() {
        let dir = make_library();
        let artifacts = find_artifacts(dir.path()).unwrap();
        let single = artifacts.iter().find(|a| a.record.id == 111).unwrap();

        let removed = remove_artifact(single).unwrap();

        assert_eq!(removed, 2); // image + sidecar
        assert!(!dir.path().join("artist/111_p0.png").exists());
        assert!(!dir.path().join("artist/111.json").exists());
        // The other artifact is untouched
        assert!(dir.path().join("artist/222/222.json").exists());
    }

    #[test]
    fn test_remove_multi_page_artifact_takes_directory() {
        let dir = make_library();
        // A leftover partial download rides along
        std::fs::write(dir.path().join("artist/222/222_p2.png.part"), b"x").unwrap();

        let artifacts = find_artifacts(dir.path()).unwrap();
        let multi = artifacts.iter().find(|a| a.record.id == 222).unwrap();

        let removed = remove_artifact(multi).unwrap();

        assert_eq!(removed, 3); // two images + sidecar
        assert!(!dir.path().join("artist/222").exists());
        assert!(dir.path().join("artist/111.json").exists());
    }

    #[test]
    fn test_is_excluded_matches_filters() {
        let dir = make_library();
        let artifacts = find_artifacts(dir.path()).unwrap();

        let filters = Filters {
            exclude: RuleSet {
                authors: vec![],
                tags: vec!["portrait".to_string()],
            },
            ..Default::default()
        };

        let excluded: Vec<u64> = artifacts
            .iter()
            .filter(|a| a.is_excluded(&filters))
            .map(|a| a.record.id)
            .collect();
        assert_eq!(excluded, vec![222]);
    }
}
