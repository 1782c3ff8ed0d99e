//! Download module for previewing and saving media.
//!
//! This module provides:
//! - Preview and download state tracking
//! - The preview pass over parsed posts
//! - Media file downloading with skip-if-present
//! - Request pacing

pub mod media;
pub mod pacing;
pub mod preview;
pub mod state;

#[cfg(test)]
pub(crate) mod fake;

pub use media::{download_media_item, download_selected};
pub use pacing::RateLimiter;
pub use preview::{fetch_previews, resolved_items};
pub use state::{DownloadResult, DownloadStatus, DownloadSummary, PostPreview, PreviewState};
