//! Normalized post references.

use std::fmt;

/// Canonical origin used for normalized post URLs.
pub const INSTAGRAM_ORIGIN: &str = "https://www.instagram.com";

/// URL path kind a post was linked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    /// `/p/<shortcode>/`
    Post,
    /// `/reel/<shortcode>/` or `/reels/<shortcode>/`
    Reel,
    /// `/tv/<shortcode>/`
    Tv,
}

impl PostKind {
    /// Map a URL path segment to a post kind.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "p" => Some(PostKind::Post),
            "reel" | "reels" => Some(PostKind::Reel),
            "tv" => Some(PostKind::Tv),
            _ => None,
        }
    }

    /// Path segment used in normalized URLs.
    pub fn segment(&self) -> &'static str {
        match self {
            PostKind::Post => "p",
            PostKind::Reel => "reel",
            PostKind::Tv => "tv",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostKind::Post => write!(f, "post"),
            PostKind::Reel => write!(f, "reel"),
            PostKind::Tv => write!(f, "tv"),
        }
    }
}

/// A validated Instagram post URL and its shortcode.
///
/// Two references are equal when their shortcodes are equal, regardless of
/// which URL form they were parsed from.
#[derive(Debug, Clone)]
pub struct PostReference {
    /// Normalized URL (no query string or fragment).
    pub url: String,

    /// Post shortcode.
    pub shortcode: String,

    /// Path kind the URL used.
    pub kind: PostKind,
}

impl PostReference {
    /// Build a reference with a normalized URL for the given shortcode.
    pub fn new(shortcode: impl Into<String>, kind: PostKind) -> Self {
        let shortcode = shortcode.into();
        let url = format!("{}/{}/{}/", INSTAGRAM_ORIGIN, kind.segment(), shortcode);
        Self {
            url,
            shortcode,
            kind,
        }
    }
}

impl PartialEq for PostReference {
    fn eq(&self, other: &Self) -> bool {
        self.shortcode == other.shortcode
    }
}

impl Eq for PostReference {}

impl std::hash::Hash for PostReference {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.shortcode.hash(state);
    }
}

impl fmt::Display for PostReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_url() {
        let post = PostReference::new("ABC123", PostKind::Reel);
        assert_eq!(post.url, "https://www.instagram.com/reel/ABC123/");
    }

    #[test]
    fn test_identity_is_shortcode() {
        let a = PostReference::new("ABC123", PostKind::Post);
        let b = PostReference::new("ABC123", PostKind::Reel);
        assert_eq!(a, b);
        assert_ne!(a, PostReference::new("XYZ789", PostKind::Post));
    }

    #[test]
    fn test_reels_segment_maps_to_reel() {
        assert_eq!(PostKind::from_segment("reels"), Some(PostKind::Reel));
        assert_eq!(PostKind::from_segment("stories"), None);
    }
}
