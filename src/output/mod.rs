//! Output module for console output, previews and progress.
//!
//! Provides:
//! - Colored console output
//! - Preview rendering and the selection prompt
//! - Progress bars
//! - Statistics reporting

pub mod console;
pub mod preview;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use preview::{format_item, prompt_selection, render_invalid, render_items};
pub use progress::create_item_bar;
pub use stats::{print_download_summary, print_preview_summary};
