//! Media parsing utilities.

use crate::api::types::{GraphQlResponse, ShortcodeMedia};
use crate::error::ResolveError;
use crate::media::item::{MediaItem, MediaKind};
use crate::post::PostReference;

/// Message fragments Instagram uses when a session is required.
const LOGIN_MARKERS: &[&str] = &["login_required", "checkpoint_required", "login required"];

/// Message fragments Instagram uses when throttling.
const RATE_LIMIT_MARKERS: &[&str] = &["please wait", "rate limit", "too many requests"];

/// Turn a decoded GraphQL response into the post's media node.
pub fn extract_shortcode_media(
    response: GraphQlResponse,
) -> std::result::Result<ShortcodeMedia, ResolveError> {
    if let Some(media) = response.data.and_then(|d| d.xdt_shortcode_media) {
        return Ok(media);
    }

    if let Some(err) = marker_error(response.message.as_deref()) {
        return Err(err);
    }

    if let Some(message) = response.message.as_deref() {
        if response.status.as_deref() == Some("fail") {
            return Err(ResolveError::Unknown(message.to_string()));
        }
    }

    if response.require_login {
        return Err(ResolveError::Private);
    }

    Err(ResolveError::NotFound)
}

/// Login or throttling reported in a response, whatever its HTTP status.
pub fn marker_error(message: Option<&str>) -> Option<ResolveError> {
    let lower = message?.to_lowercase();
    if LOGIN_MARKERS.iter().any(|m| lower.contains(m)) {
        Some(ResolveError::Private)
    } else if RATE_LIMIT_MARKERS.iter().any(|m| lower.contains(m)) {
        Some(ResolveError::RateLimited)
    } else {
        None
    }
}

/// Build the ordered media items of a post.
///
/// Carousel children keep their carousel position as ordinal, even when a
/// sibling without URLs is skipped.
pub fn parse_shortcode_media(
    post: &PostReference,
    media: &ShortcodeMedia,
) -> std::result::Result<Vec<MediaItem>, ResolveError> {
    let children = media
        .edge_sidecar_to_children
        .as_ref()
        .map(|sidecar| sidecar.edges.as_slice())
        .unwrap_or_default();

    if !children.is_empty() {
        let items: Vec<MediaItem> = children
            .iter()
            .enumerate()
            .filter_map(|(ordinal, edge)| {
                let node = &edge.node;
                let item = build_item(
                    post,
                    ordinal,
                    node.is_video,
                    node.display_url.as_deref(),
                    node.video_url.as_deref(),
                );
                if item.is_none() {
                    tracing::debug!(
                        "Skipping carousel child {} of {}: no media URL",
                        ordinal,
                        post.shortcode
                    );
                }
                item
            })
            .collect();

        if items.is_empty() {
            return Err(ResolveError::NotFound);
        }
        return Ok(items);
    }

    let preview = media.display_url.as_deref().or(media.thumbnail_src.as_deref());
    build_item(post, 0, media.is_video, preview, media.video_url.as_deref())
        .map(|item| vec![item])
        .ok_or_else(|| ResolveError::Unknown("Unable to resolve media URLs for post".into()))
}

fn build_item(
    post: &PostReference,
    ordinal: usize,
    is_video: bool,
    display_url: Option<&str>,
    video_url: Option<&str>,
) -> Option<MediaItem> {
    let preview_url = display_url.filter(|u| !u.is_empty())?;
    let (kind, source_url) = if is_video {
        (MediaKind::Video, video_url.filter(|u| !u.is_empty())?)
    } else {
        (MediaKind::Image, preview_url)
    };

    Some(MediaItem {
        shortcode: post.shortcode.clone(),
        ordinal,
        kind,
        source_url: source_url.to_string(),
        preview_url: preview_url.to_string(),
        origin_url: post.url.clone(),
    })
}
