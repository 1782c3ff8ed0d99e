//! Run mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How media is chosen once previews are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Prompt for a selection (default).
    #[default]
    Interactive,
    /// Download every previewed item.
    All,
    /// Download the items named by a selection expression.
    Selected,
    /// Show previews and stop.
    Preview,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Interactive => write!(f, "interactive"),
            RunMode::All => write!(f, "all"),
            RunMode::Selected => write!(f, "selected"),
            RunMode::Preview => write!(f, "preview"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "interactive" => Ok(RunMode::Interactive),
            "all" => Ok(RunMode::All),
            "selected" => Ok(RunMode::Selected),
            "preview" => Ok(RunMode::Preview),
            _ => Err(format!("Unknown run mode: {}", s)),
        }
    }
}
