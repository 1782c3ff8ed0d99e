//! Instagram API module.
//!
//! This module provides:
//! - The `MediaSource` boundary used by preview and download
//! - HTTP client for Instagram's web GraphQL endpoint
//! - Session credentials loaded from a cookies file
//! - API response types

pub mod client;
pub mod session;
pub mod source;
pub mod types;

pub use client::InstagramApi;
pub use session::{load_optional, SessionCredential};
pub use source::{ByteStream, MediaSource};
