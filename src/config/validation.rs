//! Configuration validation logic.

use regex::Regex;
use url::Url;

use crate::config::loader::{ClientConfig, Config};
use crate::config::modes::RunMode;
use crate::error::{Error, Result};

/// Minimum length for user agent.
const MIN_USER_AGENT_LENGTH: usize = 20;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_client(&config.client)?;
    validate_session(
        config.session.username.as_deref(),
        config.session.session_file.is_some(),
    )?;

    if config.options.mode == RunMode::Selected
        && config
            .options
            .selection
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .is_empty()
    {
        return Err(Error::MissingConfig(
            "selection (required when mode is 'selected')".to_string(),
        ));
    }

    Ok(())
}

/// Validate HTTP client settings.
pub fn validate_client(client: &ClientConfig) -> Result<()> {
    validate_user_agent(&client.user_agent)?;

    let doc_id_pattern = Regex::new(r"^\d{5,}$").expect("doc_id pattern is valid");
    if !doc_id_pattern.is_match(&client.doc_id) {
        return Err(Error::ConfigValidation {
            field: "doc_id".to_string(),
            message: format!("'{}' is not a numeric GraphQL doc id", client.doc_id),
        });
    }

    if !client.app_id.chars().all(|c| c.is_ascii_digit()) || client.app_id.is_empty() {
        return Err(Error::ConfigValidation {
            field: "app_id".to_string(),
            message: format!("'{}' is not a numeric app id", client.app_id),
        });
    }

    let endpoint = Url::parse(&client.graphql_endpoint)?;
    if endpoint.scheme() != "https" && endpoint.scheme() != "http" {
        return Err(Error::ConfigValidation {
            field: "graphql_endpoint".to_string(),
            message: format!("unsupported scheme '{}'", endpoint.scheme()),
        });
    }

    if client.timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "timeout must be at least one second".to_string(),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    if user_agent.len() < MIN_USER_AGENT_LENGTH {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: format!(
                "User agent must be at least {} characters (got {})",
                MIN_USER_AGENT_LENGTH,
                user_agent.len()
            ),
        });
    }

    Ok(())
}

/// A session file needs the username it belongs to, and vice versa.
pub fn validate_session(username: Option<&str>, has_session_file: bool) -> Result<()> {
    match (username, has_session_file) {
        (None, false) => Ok(()),
        (Some(username), true) => validate_username(username),
        (Some(_), false) => Err(Error::MissingConfig(
            "session_file (a username was given without a session file)".to_string(),
        )),
        (None, true) => Err(Error::MissingConfig(
            "username (a session file was given without a username)".to_string(),
        )),
    }
}

/// Validate an Instagram username.
pub fn validate_username(username: &str) -> Result<()> {
    // 1-30 chars: letters, digits, periods, underscores
    let username_pattern = Regex::new(r"^[A-Za-z0-9._]{1,30}$").expect("username pattern is valid");
    let clean_username = username.trim().trim_start_matches('@');

    if !username_pattern.is_match(clean_username) {
        return Err(Error::ConfigValidation {
            field: "username".to_string(),
            message: format!(
                "Username '{}' is invalid. Use 1-30 letters, digits, periods or underscores.",
                username
            ),
        });
    }

    Ok(())
}
