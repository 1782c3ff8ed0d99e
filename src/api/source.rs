//! The boundary between the application and Instagram.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::api::session::SessionCredential;
use crate::error::{FetchError, ResolveError};
use crate::media::MediaItem;
use crate::post::PostReference;

/// Streamed body of a media file.
pub type ByteStream = BoxStream<'static, std::result::Result<Bytes, FetchError>>;

/// Resolves posts into media items and fetches media bytes.
///
/// All protocol details live behind this trait.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Look up the ordered media items of a post.
    async fn resolve(
        &self,
        post: &PostReference,
        credential: Option<&SessionCredential>,
    ) -> std::result::Result<Vec<MediaItem>, ResolveError>;

    /// Start downloading a media file.
    async fn fetch(&self, url: &str) -> std::result::Result<ByteStream, FetchError>;
}
