//! Pixiv app API client and response types.

pub mod client;
pub mod types;

pub use client::PixivClient;
pub use types::{Illust, IllustAuthor, ListingPage, Tag};
