//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, RunMode};

/// Instagram media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "instagram-downloader",
    version,
    about = "Preview and download media from Instagram posts",
    long_about = "Paste Instagram post, reel or tv links, preview the images and videos they contain,\n\
                  pick the ones you want and save them under <directory>/<shortcode>/.\n\n\
                  Files that already exist are skipped."
)]
pub struct Args {
    /// Post URLs. Commas and newlines inside an argument also separate URLs.
    pub urls: Vec<String>,

    /// Read URLs from a file, or from stdin with "-".
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Instagram username the session file belongs to.
    #[arg(short, long, env = "INSTAGRAM_USERNAME")]
    pub username: Option<String>,

    /// Netscape cookies.txt of a logged-in session, for private posts.
    #[arg(short = 's', long = "session-file", env = "INSTAGRAM_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// How items are chosen: interactive, all, selected or preview.
    #[arg(long, value_name = "MODE", conflicts_with_all = ["all", "preview_only"])]
    pub mode: Option<RunMode>,

    /// Download every previewed item without prompting.
    #[arg(long, conflicts_with_all = ["select", "preview_only"])]
    pub all: bool,

    /// Download only these items (e.g. "1,3-5") without prompting.
    #[arg(long, conflicts_with = "preview_only")]
    pub select: Option<String>,

    /// Show previews and exit without downloading.
    #[arg(long)]
    pub preview_only: bool,

    /// Milliseconds to wait between post lookups.
    #[arg(long)]
    pub request_delay: Option<u64>,

    /// Milliseconds to wait between file downloads.
    #[arg(long)]
    pub download_delay: Option<u64>,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Hide progress bars and skipped-file messages.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(username) = &self.username {
            config.session.username = Some(username.clone());
        }

        if let Some(session_file) = &self.session_file {
            config.session.session_file = Some(session_file.clone());
        }

        if let Some(mode) = self.mode {
            config.options.mode = mode;
        }

        if self.all {
            config.options.mode = RunMode::All;
        }

        if let Some(select) = &self.select {
            config.options.mode = RunMode::Selected;
            config.options.selection = Some(select.clone());
        }

        if self.preview_only {
            config.options.mode = RunMode::Preview;
        }

        if let Some(delay) = self.request_delay {
            config.options.request_delay_ms = delay;
        }

        if let Some(delay) = self.download_delay {
            config.options.download_delay_ms = delay;
        }

        if self.quiet {
            config.options.show_progress = false;
            config.options.show_skipped_downloads = false;
        }
    }
}
