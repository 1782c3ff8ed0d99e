//! Instagram Downloader - preview and save media from Instagram posts.
//!
//! # Features
//!
//! - Parse pasted post, reel and tv links (comma or newline separated)
//! - Resolve posts, including carousels, into image and video items
//! - Select a subset interactively or with an expression
//! - Save to `<directory>/<shortcode>/<ordinal>.<ext>`, skipping existing files
//! - Fixed-delay pacing between network calls
//! - Optional session cookies for private posts
//!
//! # Example
//!
//! ```no_run
//! use indicatif::ProgressBar;
//! use instagram_downloader::{
//!     download::{download_selected, fetch_previews, resolved_items, RateLimiter},
//!     post::parse_input,
//!     Config, InstagramApi,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = InstagramApi::new(&config.client)?;
//!
//!     let parsed = parse_input("https://www.instagram.com/p/ABC123/");
//!     let mut pacing = RateLimiter::from_millis(2000, 250);
//!     let previews =
//!         fetch_previews(&api, parsed.posts, None, &mut pacing, &ProgressBar::hidden()).await;
//!
//!     let items = resolved_items(&previews);
//!     let selected: Vec<_> = items.iter().collect();
//!     let summary = download_selected(
//!         &api,
//!         &config,
//!         &selected,
//!         &mut RateLimiter::from_millis(500, 250),
//!         &ProgressBar::hidden(),
//!     )
//!     .await?;
//!     println!("saved {}, skipped {}", summary.saved, summary.skipped);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod post;

// Re-exports for convenience
pub use api::{InstagramApi, MediaSource, SessionCredential};
pub use config::{Config, RunMode};
pub use download::{
    download_selected, fetch_previews, DownloadResult, DownloadStatus, DownloadSummary,
    PostPreview, PreviewState, RateLimiter,
};
pub use error::{Error, FetchError, ResolveError, Result};
pub use media::{MediaItem, MediaKind, Selection};
pub use post::{parse_input, PostReference};
