//! Directory layout for mirrored illusts.
//!
//! Layout under the download root:
//! - single-page work: `<author_name>/<image basename>`
//! - multi-page work:  `<author_name>/<illust_id>/<image basename>`
//! - metadata sidecar: `<illust_id>.json` in the same directory
//!
//! The sidecar doubles as the presence marker: an illust whose sidecar
//! exists is treated as already synced.

use std::path::{Path, PathBuf};

use crate::api::Illust;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::naming::{sanitize_filename, sanitize_path_component};

/// Directory an illust's files are written into.
pub fn illust_dir(root: &Path, illust: &Illust) -> Result<PathBuf> {
    let author = sanitize_path_component(&illust.user.name)?;
    let mut dir = root.join(author);
    if illust.is_multi_page() {
        dir = dir.join(illust.id.to_string());
    }
    Ok(dir)
}

/// Local filename for an image URL: the URL basename, query stripped.
pub fn image_filename(url: &str) -> Result<String> {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let basename = without_query.rsplit('/').next().unwrap_or("");
    if basename.is_empty() {
        return Err(Error::InvalidFilename(format!(
            "Image URL has no basename: '{}'",
            url
        )));
    }
    sanitize_filename(basename)
}

/// Path of the metadata sidecar for an illust.
pub fn sidecar_path(root: &Path, illust: &Illust) -> Result<PathBuf> {
    Ok(illust_dir(root, illust)?.join(format!("{}.json", illust.id)))
}

/// Whether the local artifact for this illust already exists.
///
/// With metadata sidecars enabled the sidecar is the marker (it is written
/// last, so its presence implies all page images landed). Without sidecars
/// every page image must be present.
pub fn is_local(config: &Config, illust: &Illust) -> Result<bool> {
    let root = config.download_dir.as_path();

    if config.options.write_metadata {
        return Ok(sidecar_path(root, illust)?.exists());
    }

    let dir = illust_dir(root, illust)?;
    let urls = illust.image_urls();
    if urls.is_empty() {
        return Ok(false);
    }
    for url in urls {
        if !dir.join(image_filename(url)?).exists() {
            return Ok(false);
        }
    }
    Ok(true)
}
