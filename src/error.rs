//! Error types for the instagram-downloader application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Input errors
    #[error("No valid Instagram post URLs found")]
    NoValidUrls,

    #[error("Invalid selection: {0}")]
    Selection(String),

    #[error("Aborted by user")]
    Aborted,

    // Session errors
    #[error("Session error: {0}")]
    Session(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Download directory {} is not writable: {source}", path.display())]
    DownloadRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a post could not be resolved into media items.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("post not found")]
    NotFound,

    #[error("post is private or requires login")]
    Private,

    #[error("rate limited by Instagram")]
    RateLimited,

    #[error("{0}")]
    Unknown(String),
}

/// Why fetching a media file failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("media not found")]
    NotFound,

    #[error("media is private or access was denied")]
    PrivateOrUnauthorized,

    #[error("rate limited by Instagram")]
    RateLimited,

    #[error("network error: {0}")]
    TransientNetwork(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::TransientNetwork(err.to_string())
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

/// Exit code a run ending in `err` reports.
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Aborted => exit_codes::ABORT,
        Error::Config(_)
        | Error::ConfigValidation { .. }
        | Error::MissingConfig(_)
        | Error::TomlParse(_)
        | Error::UrlParse(_)
        | Error::Selection(_)
        | Error::NoValidUrls => exit_codes::CONFIG_ERROR,
        Error::Api(_) | Error::Session(_) | Error::Http(_) => exit_codes::API_ERROR,
        Error::Download(_) | Error::DownloadRoot { .. } | Error::Fetch(_) => {
            exit_codes::DOWNLOAD_ERROR
        }
        Error::InvalidFilename(_) | Error::Io(_) => exit_codes::UNEXPECTED_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let cases = [
            (Error::Aborted, exit_codes::ABORT),
            (Error::Api("none of the 2 post(s) could be resolved".into()), exit_codes::API_ERROR),
            (Error::NoValidUrls, exit_codes::CONFIG_ERROR),
            (Error::MissingConfig("selection".into()), exit_codes::CONFIG_ERROR),
            (Error::Download("1 of 3 item(s) failed".into()), exit_codes::DOWNLOAD_ERROR),
            (
                Error::DownloadRoot {
                    path: PathBuf::from("downloads"),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                },
                exit_codes::DOWNLOAD_ERROR,
            ),
            (Error::Fetch(FetchError::RateLimited), exit_codes::DOWNLOAD_ERROR),
            (
                Error::Io(std::io::Error::from(std::io::ErrorKind::Other)),
                exit_codes::UNEXPECTED_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(exit_code(&err), expected, "{}", err);
        }
    }
}
