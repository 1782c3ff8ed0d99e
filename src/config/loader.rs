//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::config::modes::RunMode;
use crate::error::{Error, Result};

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "instagram-downloader.toml";

/// Main configuration structure.
///
/// The file is optional and only ever read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// How items are chosen after preview.
    #[serde(default)]
    pub mode: RunMode,

    /// Selection expression used by `selected` mode.
    #[serde(default)]
    pub selection: Option<String>,

    /// Root folder for downloads.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Milliseconds to wait between post lookups.
    #[serde(default = "default_request_delay")]
    pub request_delay_ms: u64,

    /// Milliseconds to wait between file downloads.
    #[serde(default = "default_download_delay")]
    pub download_delay_ms: u64,

    /// Upper bound of random milliseconds added to each delay.
    #[serde(default = "default_jitter")]
    pub jitter_ms: u64,

    /// Whether to show progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Whether to log skipped downloads.
    #[serde(default = "default_true")]
    pub show_skipped_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            selection: None,
            download_directory: None,
            request_delay_ms: default_request_delay(),
            download_delay_ms: default_download_delay(),
            jitter_ms: default_jitter(),
            show_progress: true,
            show_skipped_downloads: true,
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// GraphQL endpoint used for post lookups.
    #[serde(default = "default_graphql_endpoint")]
    pub graphql_endpoint: String,

    /// Persisted query id of the shortcode lookup. Instagram rotates it.
    #[serde(default = "default_doc_id")]
    pub doc_id: String,

    /// Web app id sent as `X-IG-App-ID`.
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            graphql_endpoint: default_graphql_endpoint(),
            doc_id: default_doc_id(),
            app_id: default_app_id(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

/// Optional session credential location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Instagram username the session belongs to.
    #[serde(default)]
    pub username: Option<String>,

    /// Netscape cookies.txt exported from a logged-in browser.
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36".to_string()
}

fn default_graphql_endpoint() -> String {
    "https://www.instagram.com/api/graphql".to_string()
}

fn default_doc_id() -> String {
    "8845758582119845".to_string()
}

fn default_app_id() -> String {
    "936619743392459".to_string()
}

fn default_true() -> bool {
    true
}

fn default_request_delay() -> u64 {
    2000
}

fn default_download_delay() -> u64 {
    500
}

fn default_jitter() -> u64 {
    250
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    15
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("downloads"))
    }
}

/// Find the config file to use when none was given explicitly.
///
/// Prefers `./instagram-downloader.toml`, then the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    ProjectDirs::from("", "", "instagram-downloader")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .filter(|path| path.exists())
}
