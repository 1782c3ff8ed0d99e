//! Media module for item representation, parsing and selection.

pub mod item;
pub mod parser;
pub mod selection;

pub use item::{MediaItem, MediaKind};
pub use parser::{extract_shortcode_media, marker_error, parse_shortcode_media};
pub use selection::{parse_command, Command, Selection};
