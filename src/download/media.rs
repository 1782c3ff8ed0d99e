//! Media file downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use indicatif::ProgressBar;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::{ByteStream, MediaSource};
use crate::config::Config;
use crate::download::pacing::RateLimiter;
use crate::download::state::{DownloadResult, DownloadStatus, DownloadSummary};
use crate::error::{Error, Result};
use crate::fs::{ensure_download_root, get_download_path, partial_path};
use crate::media::MediaItem;

/// Download the selected items in order.
///
/// Fails as a whole only when the download root is unusable; individual
/// items that fail are recorded and the batch continues.
pub async fn download_selected(
    source: &dyn MediaSource,
    config: &Config,
    items: &[&MediaItem],
    pacing: &mut RateLimiter,
    progress: &ProgressBar,
) -> Result<DownloadSummary> {
    let root = config.download_directory();
    ensure_download_root(&root)?;

    let mut summary = DownloadSummary::default();

    for item in items {
        progress.set_message(format!("Downloading: {}/{}", item.shortcode, item.file_name()));

        let result = download_media_item(source, item, &root, pacing).await;

        match result.status {
            DownloadStatus::Saved => {
                tracing::info!("Saved: {}", display_path(&result.path));
            }
            DownloadStatus::Skipped => {
                if config.options.show_skipped_downloads {
                    tracing::info!("Skipped (exists): {}", display_path(&result.path));
                }
            }
            DownloadStatus::Failed => {
                tracing::warn!(
                    "Failed to download {}: {}",
                    item.id(),
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
        }

        summary.record(result);
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(summary)
}

/// Download one media item under `root`.
///
/// Existing nonempty files are skipped without fetching. The body is written
/// to a temporary sibling and renamed into place only once complete.
pub async fn download_media_item(
    source: &dyn MediaSource,
    item: &MediaItem,
    root: &Path,
    pacing: &mut RateLimiter,
) -> DownloadResult {
    let output_path = match get_download_path(root, item) {
        Ok(path) => path,
        Err(e) => return DownloadResult::failed(item, None, e),
    };

    if is_complete(&output_path).await {
        tracing::debug!("Skipping existing file: {}", output_path.display());
        return DownloadResult::skipped(item, output_path);
    }

    if let Some(parent) = output_path.parent() {
        if let Err(e) = tokio::fs::create_dir_all(parent).await {
            return DownloadResult::failed(item, Some(output_path), Error::Io(e));
        }
    }

    pacing.wait().await;

    match download_direct(source, &item.source_url, &output_path).await {
        Ok(bytes) => DownloadResult::saved(item, output_path, bytes),
        Err(e) => {
            if let Some(parent) = output_path.parent() {
                // Fails unless empty, which keeps earlier downloads
                if tokio::fs::remove_dir(parent).await.is_ok() {
                    tracing::debug!("Removed empty folder {}", parent.display());
                }
            }
            DownloadResult::failed(item, Some(output_path), e)
        }
    }
}

/// Whether a finished download already sits at `path`.
async fn is_complete(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

/// Fetch `url` into `output_path` through a partial file.
async fn download_direct(source: &dyn MediaSource, url: &str, output_path: &Path) -> Result<u64> {
    let mut stream = source.fetch(url).await?;
    let partial = partial_path(output_path);

    let written = match write_stream(&mut stream, &partial).await {
        Ok(0) => Err(Error::Download("empty response body".to_string())),
        Ok(written) => tokio::fs::rename(&partial, output_path)
            .await
            .map(|_| written)
            .map_err(Error::from),
        Err(e) => Err(e),
    };

    if written.is_err() {
        // Nothing partial may be left behind
        if let Err(e) = tokio::fs::remove_file(&partial).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!("Could not remove {}: {}", partial.display(), e);
            }
        }
    }

    written
}

/// Stream to file.
async fn write_stream(stream: &mut ByteStream, path: &Path) -> Result<u64> {
    let mut file = File::create(path).await?;
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
    }

    file.flush().await?;
    file.sync_all().await?;

    Ok(downloaded)
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}
