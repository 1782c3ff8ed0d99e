//! Media item representation.

use std::fmt;

/// Type of media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// File extension used when saving this kind of media.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Image => "jpg",
            MediaKind::Video => "mp4",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// A downloadable media item belonging to one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Shortcode of the owning post.
    pub shortcode: String,

    /// Zero-based position within the post (carousel order).
    pub ordinal: usize,

    /// Image or video.
    pub kind: MediaKind,

    /// URL the file bytes are fetched from.
    pub source_url: String,

    /// Image shown in previews (the item itself, or a video's poster frame).
    pub preview_url: String,

    /// Post URL the item was resolved from.
    pub origin_url: String,
}

impl MediaItem {
    /// Stable identifier, unique across posts.
    pub fn id(&self) -> String {
        format!("{}_{}", self.shortcode, self.ordinal)
    }

    /// File name inside the post folder.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.ordinal, self.kind.extension())
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
