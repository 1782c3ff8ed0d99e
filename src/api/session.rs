//! Session credentials for private posts.
//!
//! A session is a username plus a Netscape `cookies.txt` export of a logged-in
//! browser. The cookies stay in memory for the run and are never written back.

use std::fmt;
use std::path::Path;

use crate::config::SessionConfig;
use crate::error::{Error, Result};

/// Domain whose cookies are kept.
const COOKIE_DOMAIN: &str = "instagram.com";

/// Cookie that marks an authenticated session.
const SESSION_COOKIE: &str = "sessionid";

/// Prefix browsers put on HttpOnly cookie lines.
const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

/// Username and session cookies used to resolve private posts.
#[derive(Clone)]
pub struct SessionCredential {
    username: String,
    cookies: Vec<(String, String)>,
}

impl SessionCredential {
    /// Load a session from a cookies file on disk.
    pub fn load(username: &str, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Session(format!(
                "Cannot read session file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_cookies_txt(username, &content)
    }

    /// Parse Netscape cookie file content, keeping instagram.com cookies.
    pub fn from_cookies_txt(username: &str, content: &str) -> Result<Self> {
        let username = username.trim().trim_start_matches('@');
        if username.is_empty() {
            return Err(Error::Session("username is required with a session file".into()));
        }

        let mut cookies = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            let line = line.strip_prefix(HTTP_ONLY_PREFIX).unwrap_or(line);
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 7 {
                continue;
            }

            let (domain, name, value) = (parts[0].trim_start_matches('.'), parts[5], parts[6]);
            if domain == COOKIE_DOMAIN || domain.ends_with(&format!(".{}", COOKIE_DOMAIN)) {
                cookies.push((name.to_string(), value.to_string()));
            }
        }

        if !cookies.iter().any(|(name, value)| name == SESSION_COOKIE && !value.is_empty()) {
            return Err(Error::Session(format!(
                "no '{}' cookie for {} in session file",
                SESSION_COOKIE, COOKIE_DOMAIN
            )));
        }

        Ok(Self {
            username: username.to_string(),
            cookies,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Cookie` request header.
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// CSRF token to echo in `X-CSRFToken`, when the export has one.
    pub fn csrf_token(&self) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(name, _)| name == "csrftoken")
            .map(|(_, value)| value.as_str())
    }
}

/// Load the configured session, if any.
///
/// A session that cannot be read or lacks a `sessionid` is logged and
/// treated as absent, so the run continues anonymously.
pub fn load_optional(config: &SessionConfig) -> Option<SessionCredential> {
    let username = config.username.as_deref()?;
    let path = config.session_file.as_deref()?;

    match SessionCredential::load(username, path) {
        Ok(credential) => {
            tracing::debug!("Loaded session for {} from {}", username, path.display());
            Some(credential)
        }
        Err(e) => {
            tracing::warn!("{}. Using anonymous access.", e);
            None
        }
    }
}

// Cookie values are secrets
impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredential")
            .field("username", &self.username)
            .field("cookies", &self.cookies.len())
            .finish()
    }
}
