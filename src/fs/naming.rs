//! Path component checks and partial-file names.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{Error, Result};

/// Suffix of in-progress downloads.
pub const PARTIAL_SUFFIX: &str = "part";

/// Check that `name` can be used as a single path component.
///
/// Names are never rewritten; unsafe ones are rejected.
pub fn checked_component(name: &str) -> Result<&str> {
    let reason = if name.trim().is_empty() {
        Some("empty name")
    } else if name == "." || name == ".." {
        Some("relative path")
    } else if name.starts_with('.') {
        Some("hidden name")
    } else if name
        .chars()
        .any(|c| matches!(c, '/' | '\\' | ':' | '\0') || c.is_control())
    {
        Some("separator or control character")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidFilename(format!("{:?}: {}", name, reason))),
        None => Ok(name),
    }
}

/// Hidden, uniquely named sibling a download is written to before the
/// final rename.
pub fn partial_path(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    destination.with_file_name(format!(
        ".{}.{}.{}",
        file_name,
        Uuid::new_v4().simple(),
        PARTIAL_SUFFIX
    ))
}
