//! Instagram web API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, StatusCode};

use crate::api::session::SessionCredential;
use crate::api::source::{ByteStream, MediaSource};
use crate::api::types::GraphQlResponse;
use crate::config::ClientConfig;
use crate::error::{FetchError, ResolveError, Result};
use crate::media::{extract_shortcode_media, marker_error, parse_shortcode_media, MediaItem};
use crate::post::reference::INSTAGRAM_ORIGIN;
use crate::post::PostReference;

/// Facebook LSD token (anti-CSRF, public static value used by the web app).
const FB_LSD_TOKEN: &str = "AVqbxe3J_YA";

/// Facebook ASBD ID (public, embedded in the web app).
const FB_ASBD_ID: &str = "129477";

/// Instagram client resolving posts through the web GraphQL endpoint.
pub struct InstagramApi {
    client: Client,
    graphql_endpoint: String,
    doc_id: String,
    app_id: String,
}

impl InstagramApi {
    /// Create a new API client.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            graphql_endpoint: config.graphql_endpoint.clone(),
            doc_id: config.doc_id.clone(),
            app_id: config.app_id.clone(),
        })
    }

    /// POST the shortcode query and decode the response body.
    async fn query_shortcode(
        &self,
        shortcode: &str,
        credential: Option<&SessionCredential>,
    ) -> std::result::Result<GraphQlResponse, ResolveError> {
        let variables = serde_json::json!({ "shortcode": shortcode }).to_string();

        let mut request = self
            .client
            .post(&self.graphql_endpoint)
            .header("X-IG-App-ID", self.app_id.as_str())
            .header("X-FB-LSD", FB_LSD_TOKEN)
            .header("X-ASBD-ID", FB_ASBD_ID)
            .header("X-Requested-With", "XMLHttpRequest")
            .header(header::REFERER, format!("{}/", INSTAGRAM_ORIGIN))
            .header(header::ORIGIN, INSTAGRAM_ORIGIN)
            .form(&[
                ("doc_id", self.doc_id.as_str()),
                ("variables", variables.as_str()),
                ("lsd", FB_LSD_TOKEN),
            ]);

        if let Some(credential) = credential {
            request = request.header(header::COOKIE, credential.cookie_header());
            if let Some(csrf) = credential.csrf_token() {
                request = request.header("X-CSRFToken", csrf);
            }
        }

        tracing::debug!(
            "POST {} shortcode={} (session={})",
            self.graphql_endpoint,
            shortcode,
            credential.map(|c| c.username()).unwrap_or("none")
        );

        let response = request
            .send()
            .await
            .map_err(|e| ResolveError::Unknown(format!("request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        match status {
            StatusCode::TOO_MANY_REQUESTS => return Err(ResolveError::RateLimited),
            StatusCode::NOT_FOUND => return Err(ResolveError::NotFound),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ResolveError::Private)
            }
            _ => {}
        }

        let text = response
            .text()
            .await
            .map_err(|e| ResolveError::Unknown(format!("failed to read response: {}", e)))?;

        let response: GraphQlResponse = serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(
                "Non-JSON GraphQL response ({}): {}",
                e,
                text.chars().take(300).collect::<String>()
            );
            if status.is_success() {
                ResolveError::Unknown(format!("unexpected response: {}", e))
            } else {
                ResolveError::Unknown(format!("HTTP {}", status))
            }
        })?;

        if !status.is_success() {
            return Err(marker_error(response.message.as_deref())
                .unwrap_or_else(|| ResolveError::Unknown(format!("HTTP {}", status))));
        }

        Ok(response)
    }
}

#[async_trait]
impl MediaSource for InstagramApi {
    async fn resolve(
        &self,
        post: &PostReference,
        credential: Option<&SessionCredential>,
    ) -> std::result::Result<Vec<MediaItem>, ResolveError> {
        let response = self.query_shortcode(&post.shortcode, credential).await?;
        let media = extract_shortcode_media(response)?;
        parse_shortcode_media(post, &media)
    }

    async fn fetch(&self, url: &str) -> std::result::Result<ByteStream, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::NOT_FOUND | StatusCode::GONE => FetchError::NotFound,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    FetchError::PrivateOrUnauthorized
                }
                StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimited,
                _ => FetchError::TransientNetwork(format!("HTTP {}", status)),
            });
        }

        Ok(response.bytes_stream().map(|chunk| chunk.map_err(FetchError::from)).boxed())
    }
}
