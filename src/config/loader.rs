//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::filters::Filters;
use crate::error::{Error, Result};

/// Main configuration structure, mapped from the YAML config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Pixiv session token. Written by `set-token`, read at sync start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Numeric Pixiv account ID; required for bookmark targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Root directory the mirrored illustrations are written under.
    pub download_dir: PathBuf,

    /// Bookmark collections to mirror (public and/or private).
    #[serde(default)]
    pub bookmarks: Vec<BookmarkVisibility>,

    /// Author targets, as numeric IDs or profile URLs.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Include/exclude rules applied to every listed illust.
    #[serde(default)]
    pub filters: Filters,

    #[serde(default)]
    pub options: Options,
}

/// Visibility class of a bookmark collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkVisibility {
    Public,
    Private,
}

impl BookmarkVisibility {
    /// Value of the `restrict` query parameter for this collection.
    pub fn restrict(&self) -> &'static str {
        match self {
            BookmarkVisibility::Public => "public",
            BookmarkVisibility::Private => "private",
        }
    }
}

impl std::fmt::Display for BookmarkVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.restrict())
    }
}

/// Sync behaviour options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Stop bookmark paging at the first already-local illust.
    /// Bookmark listings are reverse-chronological, so everything past the
    /// first known item was seen by an earlier run.
    #[serde(default = "default_true")]
    pub stop_on_known: bool,

    /// Write a `<illust_id>.json` metadata sidecar next to the images.
    #[serde(default = "default_true")]
    pub write_metadata: bool,

    /// Log illusts that were skipped as already-local.
    #[serde(default)]
    pub show_skipped: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            stop_on_known: true,
            write_metadata: true,
            show_skipped: false,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigParse(format!(
                    "Configuration file not found: {}. Create one from config.example.yml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigParse(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigWrite(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| Error::ConfigWrite(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Set the session token, overwriting any prior value.
    ///
    /// The token is opaque to this tool; the only check is that it is
    /// non-empty. Validity can only be established by the remote service.
    pub fn set_token(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::ConfigValidation {
                field: "token".to_string(),
                message: "Token must not be empty".to_string(),
            });
        }
        self.token = Some(token.to_string());
        Ok(())
    }

    /// Token value, treating an empty string the same as no token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Structural validation beyond what serde enforces.
    fn validate(&self) -> Result<()> {
        if self.download_dir.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                field: "download_dir".to_string(),
                message: "Download directory must not be empty".to_string(),
            });
        }

        if !self.bookmarks.is_empty() && self.user_id.is_none() {
            return Err(Error::ConfigValidation {
                field: "user_id".to_string(),
                message: "user_id is required when bookmark targets are configured".to_string(),
            });
        }

        Ok(())
    }

    /// Whether any sync target is configured at all.
    pub fn has_targets(&self) -> bool {
        !self.bookmarks.is_empty() || !self.authors.is_empty()
    }
}
