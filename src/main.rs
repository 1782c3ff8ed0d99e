//! Instagram Downloader - CLI entry point.

use std::io::{IsTerminal, Read};
use std::process::ExitCode;

use clap::Parser;
use console::Term;
use tracing_subscriber::{fmt, EnvFilter};

use instagram_downloader::{
    api::{load_optional, InstagramApi, SessionCredential},
    cli::Args,
    config::{default_config_path, validate_config, Config, RunMode},
    download::{download_selected, fetch_previews, resolved_items, RateLimiter},
    error::{exit_code, exit_codes, Error, Result},
    media::{parse_command, Command, Selection},
    output::{
        create_item_bar, print_banner, print_config_summary, print_download_summary, print_error,
        print_info, print_preview_summary, print_success, prompt_selection, render_invalid,
        render_items,
    },
    post::parse_input,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    if !args.quiet {
        print_banner();
    }

    // Load configuration
    let mut config = match args.config.clone().or_else(default_config_path) {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            Config::load(&path)?
        }
        None => Config::default(),
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Parse URLs
    let (raw_input, stdin_consumed) = read_raw_input(&args)?;
    let parsed = parse_input(&raw_input);
    render_invalid(&parsed.invalid);

    if parsed.posts.is_empty() {
        return Err(Error::NoValidUrls);
    }

    let credential = load_optional(&config.session);
    if let Some(credential) = &credential {
        print_info(&format!("Using session for {}", credential.username()));
    }

    print_config_summary(
        parsed.posts.len(),
        &config.options.mode.to_string(),
        &config.download_directory().display().to_string(),
        credential.as_ref().map(SessionCredential::username),
    );

    let api = InstagramApi::new(&config.client)?;

    // Preview
    let post_count = parsed.posts.len();
    let mut request_pacing =
        RateLimiter::from_millis(config.options.request_delay_ms, config.options.jitter_ms);
    let progress = create_item_bar(post_count as u64, config.options.show_progress);
    let previews = fetch_previews(
        &api,
        parsed.posts,
        credential.as_ref(),
        &mut request_pacing,
        &progress,
    )
    .await;

    print_preview_summary(&previews);

    let items = resolved_items(&previews);
    if items.is_empty() {
        return Err(Error::Api(format!(
            "none of the {} post(s) could be resolved",
            post_count
        )));
    }

    // Select
    let mut selection = Selection::new(items.len());
    match config.options.mode {
        RunMode::Preview => {
            render_items(&items, &selection);
            return Ok(());
        }
        RunMode::All => selection.select_all(),
        RunMode::Selected => {
            let expression = config.options.selection.as_deref().unwrap_or_default();
            match parse_command(expression, items.len())? {
                Command::Abort => return Err(Error::Aborted),
                command => selection.apply(&command),
            }
        }
        RunMode::Interactive => {
            if std::io::stdin().is_terminal() && !stdin_consumed {
                let term = Term::stdout();
                prompt_selection(&items, &mut selection, || term.read_line().map(Some))?;
            } else {
                print_info("No terminal for a selection prompt; downloading all items");
                render_items(&items, &selection);
            }
        }
    }

    let chosen = selection.pick(&items);
    if chosen.is_empty() {
        print_info("No media selected.");
        return Ok(());
    }

    // Download
    let mut download_pacing =
        RateLimiter::from_millis(config.options.download_delay_ms, config.options.jitter_ms);
    let progress = create_item_bar(chosen.len() as u64, config.options.show_progress);
    let summary =
        download_selected(&api, &config, &chosen, &mut download_pacing, &progress).await?;

    print_download_summary(&summary);

    let root = config.download_directory();
    let root = root.canonicalize().unwrap_or(root);
    print_success(&format!(
        "Saved {} file(s), skipped {}. Folder: {}",
        summary.saved,
        summary.skipped,
        root.display()
    ));

    if summary.failed > 0 {
        return Err(Error::Download(format!(
            "{} of {} item(s) failed",
            summary.failed,
            summary.total()
        )));
    }

    Ok(())
}

/// Collect raw URL text from arguments, an input file or stdin.
///
/// Returns the text and whether stdin was read to get it.
fn read_raw_input(args: &Args) -> Result<(String, bool)> {
    let mut raw = args.urls.join("\n");
    let mut stdin_consumed = false;

    match args.input.as_deref() {
        Some(path) if path.as_os_str() == "-" => {
            raw.push('\n');
            std::io::stdin().read_to_string(&mut raw)?;
            stdin_consumed = true;
        }
        Some(path) => {
            raw.push('\n');
            raw.push_str(&std::fs::read_to_string(path)?);
        }
        None if args.urls.is_empty() => {
            if std::io::stdin().is_terminal() {
                raw = prompt_urls()?;
            } else {
                std::io::stdin().read_to_string(&mut raw)?;
                stdin_consumed = true;
            }
        }
        None => {}
    }

    Ok((raw, stdin_consumed))
}

/// Ask for URLs on the terminal until an empty line.
fn prompt_urls() -> Result<String> {
    let term = Term::stdout();
    print_info("Paste Instagram post URLs (comma or newline separated), empty line to finish:");

    let mut lines = Vec::new();
    loop {
        let line = term.read_line()?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}
