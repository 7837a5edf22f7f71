//! Configuration module for pixiv-sync.
//!
//! This module handles:
//! - Loading and saving the YAML configuration file
//! - Persisting the session token (`set-token`)
//! - Include/exclude filter rules

pub mod filters;
pub mod loader;

pub use filters::{Filters, RuleSet};
pub use loader::{BookmarkVisibility, Config, Options};
