//! Path and directory management.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::fs::naming::checked_component;
use crate::media::MediaItem;

/// Folder holding every file of one post.
pub fn get_post_folder(root: &Path, shortcode: &str) -> Result<PathBuf> {
    Ok(root.join(checked_component(shortcode)?))
}

/// Destination of a media item: `<root>/<shortcode>/<ordinal>.<ext>`.
pub fn get_download_path(root: &Path, item: &MediaItem) -> Result<PathBuf> {
    Ok(get_post_folder(root, &item.shortcode)?.join(item.file_name()))
}

/// Create the download root and check that files can be written into it.
///
/// Failing here aborts the whole batch.
pub fn ensure_download_root(root: &Path) -> Result<()> {
    let fail = |source: std::io::Error| Error::DownloadRoot {
        path: root.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(root).map_err(fail)?;

    let probe = root.join(format!(".write-probe-{}", Uuid::new_v4().simple()));
    std::fs::write(&probe, b"").map_err(fail)?;
    std::fs::remove_file(&probe).map_err(fail)?;

    Ok(())
}
