//! Console output utilities.

use console::{style, StyledObject};

/// Severity tag in front of a status line.
#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn tag(self) -> StyledObject<&'static str> {
        match self {
            Level::Info => style("INFO").cyan().bold(),
            Level::Success => style("OK").green().bold(),
            Level::Warning => style("WARN").yellow().bold(),
            Level::Error => style("ERROR").red().bold(),
        }
    }
}

fn status(level: Level, message: &str) {
    match level {
        Level::Info | Level::Success => println!("{} {}", level.tag(), message),
        Level::Warning | Level::Error => eprintln!("{} {}", level.tag(), message),
    }
}

pub fn print_info(message: &str) {
    status(Level::Info, message);
}

pub fn print_success(message: &str) {
    status(Level::Success, message);
}

/// Written to stderr, like errors.
pub fn print_warning(message: &str) {
    status(Level::Warning, message);
}

pub fn print_error(message: &str) {
    status(Level::Error, message);
}

/// Print the application name and version.
pub fn print_banner() {
    println!(
        "{} {}",
        style("instagram-downloader").magenta().bold(),
        style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
    );
    println!("{}", style("Preview and save media from Instagram posts").dim());
}

/// Print what this run is about to do.
pub fn print_config_summary(
    post_count: usize,
    mode: &str,
    download_dir: &str,
    session: Option<&str>,
) {
    let rows = [
        ("Posts", post_count.to_string()),
        ("Mode", mode.to_string()),
        ("Directory", download_dir.to_string()),
        ("Session", session.unwrap_or("anonymous").to_string()),
    ];

    println!();
    for (label, value) in rows {
        println!("  {:<10} {}", style(label).bold(), value);
    }
    println!();
}
