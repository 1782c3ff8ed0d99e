//! In-memory `MediaSource` for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};

use crate::api::{ByteStream, MediaSource, SessionCredential};
use crate::error::{FetchError, ResolveError};
use crate::media::{MediaItem, MediaKind};
use crate::post::PostReference;

enum Blob {
    Body(Vec<u8>),
    Fail(FetchError),
    /// Sends the bytes, then errors mid-stream.
    Broken(Vec<u8>),
}

#[derive(Default)]
pub struct FakeSource {
    posts: HashMap<String, Result<Vec<MediaItem>, ResolveError>>,
    blobs: HashMap<String, Blob>,
    resolve_calls: Mutex<Vec<String>>,
    fetch_calls: Mutex<Vec<String>>,
}

pub fn source_url(shortcode: &str, ordinal: usize) -> String {
    format!("https://cdn.test/{}/{}", shortcode, ordinal)
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_post(mut self, shortcode: &str, media: Vec<(MediaKind, Vec<u8>)>) -> Self {
        let post = PostReference::new(shortcode, crate::post::PostKind::Post);
        let mut items = Vec::new();
        for (ordinal, (kind, body)) in media.into_iter().enumerate() {
            let url = source_url(shortcode, ordinal);
            self.blobs.insert(url.clone(), Blob::Body(body));
            items.push(MediaItem {
                shortcode: shortcode.to_string(),
                ordinal,
                kind,
                source_url: url.clone(),
                preview_url: url,
                origin_url: post.url.clone(),
            });
        }
        self.posts.insert(shortcode.to_string(), Ok(items));
        self
    }

    pub fn with_failed_post(mut self, shortcode: &str, error: ResolveError) -> Self {
        self.posts.insert(shortcode.to_string(), Err(error));
        self
    }

    pub fn with_failed_fetch(mut self, shortcode: &str, ordinal: usize, error: FetchError) -> Self {
        self.blobs
            .insert(source_url(shortcode, ordinal), Blob::Fail(error));
        self
    }

    pub fn with_broken_stream(mut self, shortcode: &str, ordinal: usize) -> Self {
        self.blobs.insert(
            source_url(shortcode, ordinal),
            Blob::Broken(b"partial".to_vec()),
        );
        self
    }

    pub fn items(&self, shortcode: &str) -> Vec<MediaItem> {
        match self.posts.get(shortcode) {
            Some(Ok(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn resolve_calls(&self) -> Vec<String> {
        self.resolve_calls.lock().unwrap().clone()
    }

    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaSource for FakeSource {
    async fn resolve(
        &self,
        post: &PostReference,
        _credential: Option<&SessionCredential>,
    ) -> Result<Vec<MediaItem>, ResolveError> {
        self.resolve_calls
            .lock()
            .unwrap()
            .push(post.shortcode.clone());
        self.posts
            .get(&post.shortcode)
            .cloned()
            .unwrap_or(Err(ResolveError::NotFound))
    }

    async fn fetch(&self, url: &str) -> Result<ByteStream, FetchError> {
        self.fetch_calls.lock().unwrap().push(url.to_string());
        match self.blobs.get(url) {
            Some(Blob::Body(body)) => {
                let (head, tail) = body.split_at(body.len() / 2);
                let chunks = vec![
                    Ok(Bytes::copy_from_slice(head)),
                    Ok(Bytes::copy_from_slice(tail)),
                ];
                Ok(stream::iter(chunks).boxed())
            }
            Some(Blob::Broken(body)) => {
                let chunks = vec![
                    Ok(Bytes::copy_from_slice(body)),
                    Err(FetchError::TransientNetwork("connection reset".into())),
                ];
                Ok(stream::iter(chunks).boxed())
            }
            Some(Blob::Fail(error)) => Err(error.clone()),
            None => Err(FetchError::NotFound),
        }
    }
}
