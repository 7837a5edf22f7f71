//! pixiv-sync - mirror Pixiv bookmarks to local storage.
//!
//! This library implements a small synchronization tool over the Pixiv app
//! API: it persists a session token into a YAML configuration file, pages
//! through the user's bookmarked illustrations (and optionally followed
//! authors), and downloads every illustration not yet present locally along
//! with a JSON metadata sidecar.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use pixiv_sync::{api::PixivClient, config::Config, sync::run_sync};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.yml"))?;
//!     let client = PixivClient::new(config.token.clone().unwrap_or_default())?;
//!     let stats = run_sync(&config, &client).await?;
//!     println!("downloaded {} illusts", stats.downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod sync;

// Re-exports for convenience
pub use api::PixivClient;
pub use config::Config;
pub use error::{Error, Result};
pub use sync::{run_sync, GlobalStats, TargetStats};
