//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pixiv bookmark mirroring CLI.
#[derive(Parser, Debug)]
#[command(
    name = "pixiv-sync",
    version,
    about = "Mirror Pixiv bookmarks and followed authors to local storage",
    long_about = "A CLI tool that pages through your Pixiv bookmarks (and optionally \
                  configured authors) and downloads every illustration not yet present \
                  locally, together with a JSON metadata sidecar."
)]
pub struct Args {
    /// Path to the YAML configuration file.
    #[arg(short = 'C', long = "config", default_value = "config.yml")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Persist a session token into the configuration file.
    SetToken {
        /// The session token obtained from a logged-in browser session.
        token: String,
    },

    /// Mirror all configured targets to the download directory.
    Sync,

    /// Delete locally mirrored illusts by ID (images, sidecar, and the
    /// per-illust directory for multi-page works).
    Remove {
        /// Illust IDs to remove.
        #[arg(required = true)]
        ids: Vec<u64>,

        /// List what would be removed without deleting anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete every locally mirrored illust the exclusion filters now
    /// reject, e.g. after tightening the filter rules.
    RemoveExcluded {
        /// List what would be removed without deleting anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// Count locally mirrored artifacts.
    Count,
}
