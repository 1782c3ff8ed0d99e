//! Filesystem module.
//!
//! Provides:
//! - Download path layout and root checks
//! - Path component checks and partial-file naming

pub mod naming;
pub mod paths;

pub use naming::{checked_component, partial_path};
pub use paths::{ensure_download_root, get_download_path, get_post_folder};
