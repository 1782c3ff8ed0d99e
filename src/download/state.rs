//! Preview and download state tracking.

use std::fmt;
use std::path::PathBuf;

use crate::error::ResolveError;
use crate::media::MediaItem;
use crate::post::PostReference;

/// Lifecycle of one post's preview.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Pending,
    Previewing,
    Previewed(Vec<MediaItem>),
    PreviewFailed(ResolveError),
}

/// One post and where its preview stands.
#[derive(Debug, Clone)]
pub struct PostPreview {
    pub post: PostReference,
    pub state: PreviewState,
}

impl PostPreview {
    pub fn new(post: PostReference) -> Self {
        Self {
            post,
            state: PreviewState::Pending,
        }
    }

    /// Resolved items, empty unless previewed.
    pub fn items(&self) -> &[MediaItem] {
        match &self.state {
            PreviewState::Previewed(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&ResolveError> {
        match &self.state {
            PreviewState::PreviewFailed(err) => Some(err),
            _ => None,
        }
    }

    /// One-line progress text for the current state.
    pub fn status_line(&self) -> String {
        match &self.state {
            PreviewState::Pending => format!("Queued: {}", self.post.url),
            PreviewState::Previewing => format!("Fetching: {}", self.post.url),
            PreviewState::Previewed(items) => {
                format!("Found {} item(s): {}", items.len(), self.post.url)
            }
            PreviewState::PreviewFailed(err) => format!("Failed ({}): {}", err, self.post.url),
        }
    }
}

/// Outcome of one item download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    Saved,
    Skipped,
    Failed,
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadStatus::Saved => write!(f, "saved"),
            DownloadStatus::Skipped => write!(f, "skipped"),
            DownloadStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Result of attempting to save one media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub item_id: String,
    /// Destination, when one could be computed.
    pub path: Option<PathBuf>,
    pub status: DownloadStatus,
    pub error: Option<String>,
    pub bytes: u64,
}

impl DownloadResult {
    pub fn saved(item: &MediaItem, path: PathBuf, bytes: u64) -> Self {
        Self {
            item_id: item.id(),
            path: Some(path),
            status: DownloadStatus::Saved,
            error: None,
            bytes,
        }
    }

    pub fn skipped(item: &MediaItem, path: PathBuf) -> Self {
        Self {
            item_id: item.id(),
            path: Some(path),
            status: DownloadStatus::Skipped,
            error: None,
            bytes: 0,
        }
    }

    pub fn failed(item: &MediaItem, path: Option<PathBuf>, error: impl ToString) -> Self {
        Self {
            item_id: item.id(),
            path,
            status: DownloadStatus::Failed,
            error: Some(error.to_string()),
            bytes: 0,
        }
    }
}

/// Totals for one download batch.
#[derive(Debug, Default)]
pub struct DownloadSummary {
    pub saved: u64,
    pub skipped: u64,
    pub failed: u64,
    pub bytes: u64,
    pub results: Vec<DownloadResult>,
}

impl DownloadSummary {
    /// Count a result and keep it.
    pub fn record(&mut self, result: DownloadResult) {
        match result.status {
            DownloadStatus::Saved => {
                self.saved += 1;
                self.bytes += result.bytes;
            }
            DownloadStatus::Skipped => self.skipped += 1,
            DownloadStatus::Failed => self.failed += 1,
        }
        self.results.push(result);
    }

    pub fn total(&self) -> u64 {
        self.saved + self.skipped + self.failed
    }
}
