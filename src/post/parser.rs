//! Parsing of pasted post URLs.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::post::reference::{PostKind, PostReference};

/// Shortcodes are URL-safe base64 characters.
static SHORTCODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("shortcode pattern is valid"));

/// Hosts accepted as Instagram.
const INSTAGRAM_HOSTS: &[&str] = &["instagram.com", "www.instagram.com"];

/// Why an input token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    NotAUrl,
    NotInstagram,
    UnsupportedPath,
    MissingShortcode,
    MalformedShortcode,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::NotAUrl => write!(f, "not a URL"),
            InvalidReason::NotInstagram => write!(f, "not an instagram.com URL"),
            InvalidReason::UnsupportedPath => {
                write!(f, "expected a /p/, /reel/ or /tv/ post link")
            }
            InvalidReason::MissingShortcode => write!(f, "post link has no shortcode"),
            InvalidReason::MalformedShortcode => write!(f, "shortcode contains invalid characters"),
        }
    }
}

/// An input token that did not parse as a post URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUrl {
    pub input: String,
    pub reason: InvalidReason,
}

/// Result of parsing a block of pasted text.
#[derive(Debug, Default)]
pub struct ParsedInput {
    /// Valid posts in first-seen order, one per shortcode.
    pub posts: Vec<PostReference>,

    /// Rejected tokens in input order.
    pub invalid: Vec<InvalidUrl>,
}

/// Split raw text on commas and newlines and parse every token.
///
/// Invalid tokens are reported, never fatal. Posts repeated under a
/// different URL form are kept once.
pub fn parse_input(raw: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();
    let mut seen = HashSet::new();

    for token in raw
        .split(|c| c == ',' || c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        match parse_post_url(token) {
            Ok(post) => {
                if seen.insert(post.shortcode.clone()) {
                    parsed.posts.push(post);
                } else {
                    tracing::debug!("Dropping duplicate post link: {}", token);
                }
            }
            Err(reason) => parsed.invalid.push(InvalidUrl {
                input: token.to_string(),
                reason,
            }),
        }
    }

    parsed
}

/// Extract the shortcode from a post URL, if it is one.
pub fn extract_shortcode(url: &str) -> Option<String> {
    parse_post_url(url).ok().map(|post| post.shortcode)
}

/// Parse a single token into a post reference.
///
/// Supports `/p/<code>/`, `/reel/<code>/`, `/reels/<code>/`, `/tv/<code>/`,
/// optionally prefixed with a `/<username>` segment.
pub fn parse_post_url(token: &str) -> std::result::Result<PostReference, InvalidReason> {
    // Query and fragment never carry post identity
    let without_query = token.split(['?', '#']).next().unwrap_or_default();

    let url = Url::parse(without_query).map_err(|_| InvalidReason::NotAUrl)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(InvalidReason::NotAUrl);
    }

    let host = url
        .host_str()
        .map(str::to_ascii_lowercase)
        .ok_or(InvalidReason::NotAUrl)?;
    if !INSTAGRAM_HOSTS.contains(&host.as_str()) {
        return Err(InvalidReason::NotInstagram);
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let (kind, kind_index) = match segments.as_slice() {
        [first, ..] if PostKind::from_segment(first).is_some() => {
            (PostKind::from_segment(first), 0)
        }
        [_, second, ..] if PostKind::from_segment(second).is_some() => {
            (PostKind::from_segment(second), 1)
        }
        _ => (None, 0),
    };
    let kind = kind.ok_or(InvalidReason::UnsupportedPath)?;

    let shortcode = segments
        .get(kind_index + 1)
        .ok_or(InvalidReason::MissingShortcode)?;
    if !SHORTCODE_PATTERN.is_match(shortcode) {
        return Err(InvalidReason::MalformedShortcode);
    }

    Ok(PostReference::new(*shortcode, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_shapes_extract_shortcode() {
        let cases = [
            ("https://www.instagram.com/p/ABC123/", "ABC123", PostKind::Post),
            ("https://instagram.com/reel/XYZ789", "XYZ789", PostKind::Reel),
            ("http://www.instagram.com/tv/Tv_-9/", "Tv_-9", PostKind::Tv),
            ("https://www.instagram.com/reels/R33ls/", "R33ls", PostKind::Reel),
            ("https://www.instagram.com/someuser/p/U5er/", "U5er", PostKind::Post),
        ];

        for (input, shortcode, kind) in cases {
            let post = parse_post_url(input).unwrap();
            assert_eq!(post.shortcode, shortcode, "input: {}", input);
            assert_eq!(post.kind, kind, "input: {}", input);
        }
    }

    #[test]
    fn test_query_and_fragment_stripped() {
        let post = parse_post_url("https://www.instagram.com/p/ABC123/?igsh=xyz#frag").unwrap();
        assert_eq!(post.shortcode, "ABC123");
        assert_eq!(post.url, "https://www.instagram.com/p/ABC123/");
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(parse_post_url("not-a-url").unwrap_err(), InvalidReason::NotAUrl);
        assert_eq!(
            parse_post_url("ftp://www.instagram.com/p/ABC/").unwrap_err(),
            InvalidReason::NotAUrl
        );
        assert_eq!(
            parse_post_url("https://example.com/p/ABC123/").unwrap_err(),
            InvalidReason::NotInstagram
        );
        assert_eq!(
            parse_post_url("https://www.instagram.com/p/").unwrap_err(),
            InvalidReason::MissingShortcode
        );
        assert_eq!(
            parse_post_url("https://www.instagram.com/someuser/").unwrap_err(),
            InvalidReason::UnsupportedPath
        );
        assert_eq!(
            parse_post_url("https://www.instagram.com/stories/someuser/123/").unwrap_err(),
            InvalidReason::UnsupportedPath
        );
        assert_eq!(
            parse_post_url("https://www.instagram.com/p/AB%20C/").unwrap_err(),
            InvalidReason::MalformedShortcode
        );
    }

    #[test]
    fn test_mixed_batch() {
        let parsed = parse_input(
            "https://www.instagram.com/p/ABC123/, not-a-url, https://www.instagram.com/reel/XYZ789/",
        );

        let shortcodes: Vec<_> = parsed.posts.iter().map(|p| p.shortcode.as_str()).collect();
        assert_eq!(shortcodes, vec!["ABC123", "XYZ789"]);
        assert_eq!(parsed.invalid.len(), 1);
        assert_eq!(parsed.invalid[0].input, "not-a-url");
        assert_eq!(parsed.invalid[0].reason, InvalidReason::NotAUrl);
    }

    #[test]
    fn test_newlines_blank_lines_and_duplicates() {
        let raw = "\n  https://www.instagram.com/p/AAA/ \r\n\nhttps://instagram.com/p/AAA/?utm=1\nhttps://www.instagram.com/reel/AAA/\n,https://www.instagram.com/tv/BBB/,,";
        let parsed = parse_input(raw);

        let shortcodes: Vec<_> = parsed.posts.iter().map(|p| p.shortcode.as_str()).collect();
        assert_eq!(shortcodes, vec!["AAA", "BBB"]);
        assert!(parsed.invalid.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_input("  \n , ");
        assert!(parsed.posts.is_empty());
        assert!(parsed.invalid.is_empty());
    }

    #[test]
    fn test_extract_shortcode() {
        assert_eq!(
            extract_shortcode("https://www.instagram.com/tv/CODE_1/"),
            Some("CODE_1".to_string())
        );
        assert_eq!(extract_shortcode("https://www.instagram.com/explore/"), None);
    }
}
