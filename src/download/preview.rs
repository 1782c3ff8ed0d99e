//! Preview pass: resolve every post into media items.

use indicatif::ProgressBar;

use crate::api::{MediaSource, SessionCredential};
use crate::download::pacing::RateLimiter;
use crate::download::state::{PostPreview, PreviewState};
use crate::media::MediaItem;
use crate::post::PostReference;

/// Resolve each post in order.
///
/// A failing post is logged and marked failed; the remaining posts are
/// still resolved. Calls are paced by `pacing`.
pub async fn fetch_previews(
    source: &dyn MediaSource,
    posts: Vec<PostReference>,
    credential: Option<&SessionCredential>,
    pacing: &mut RateLimiter,
    progress: &ProgressBar,
) -> Vec<PostPreview> {
    let mut previews: Vec<PostPreview> = posts.into_iter().map(PostPreview::new).collect();

    for preview in previews.iter_mut() {
        pacing.wait().await;

        preview.state = PreviewState::Previewing;
        progress.set_message(preview.status_line());

        preview.state = match source.resolve(&preview.post, credential).await {
            Ok(items) => {
                tracing::info!("Found {} item(s) in {}", items.len(), preview.post.url);
                PreviewState::Previewed(items)
            }
            Err(e) => {
                tracing::warn!("Preview failed for {}: {}", preview.post.url, e);
                PreviewState::PreviewFailed(e)
            }
        };

        progress.inc(1);
    }

    progress.finish_and_clear();
    previews
}

/// Every resolved item across previews, in post then carousel order.
pub fn resolved_items(previews: &[PostPreview]) -> Vec<MediaItem> {
    previews
        .iter()
        .flat_map(|preview| preview.items().iter().cloned())
        .collect()
}
