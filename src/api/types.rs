//! GraphQL response type definitions.

use serde::Deserialize;

/// Top-level GraphQL response.
///
/// Error responses carry `message`/`status` instead of `data`.
#[derive(Debug, Default, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<GraphQlData>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub require_login: bool,
}

/// The `data` object of a post lookup.
#[derive(Debug, Default, Deserialize)]
pub struct GraphQlData {
    #[serde(default, alias = "shortcode_media")]
    pub xdt_shortcode_media: Option<ShortcodeMedia>,
}

/// A post as returned by the shortcode query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortcodeMedia {
    #[serde(rename = "__typename", default)]
    pub typename: Option<String>,
    #[serde(default)]
    pub shortcode: Option<String>,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_src: Option<String>,
    #[serde(default)]
    pub edge_sidecar_to_children: Option<SidecarEdges>,
}

/// Carousel children.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SidecarEdges {
    #[serde(default)]
    pub edges: Vec<SidecarEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SidecarEdge {
    pub node: SidecarNode,
}

/// One carousel child.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SidecarNode {
    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}
