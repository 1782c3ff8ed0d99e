//! Post module for URL parsing and post references.

pub mod parser;
pub mod reference;

pub use parser::{extract_shortcode, parse_input, InvalidReason, InvalidUrl, ParsedInput};
pub use reference::{PostKind, PostReference};
