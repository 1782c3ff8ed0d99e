//! Statistics reporting.

use console::style;

use crate::download::{DownloadStatus, DownloadSummary, PostPreview, PreviewState};

/// Print per-post preview failures and totals.
pub fn print_preview_summary(previews: &[PostPreview]) {
    let failed: Vec<&PostPreview> = previews
        .iter()
        .filter(|p| matches!(p.state, PreviewState::PreviewFailed(_)))
        .collect();
    let items: usize = previews.iter().map(|p| p.items().len()).sum();

    println!();
    println!(
        "Resolved {} of {} post(s), {} media item(s)",
        style(previews.len() - failed.len()).green(),
        previews.len(),
        style(items).green()
    );
    for preview in failed {
        if let Some(err) = preview.error() {
            println!("  {} {}: {}", style("✗").red(), preview.post.url, err);
        }
    }
}

/// Print the outcome of a download batch.
pub fn print_download_summary(summary: &DownloadSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Download Statistics:").bold());
    println!("  Saved:    {}", style(summary.saved).green());
    println!("  Skipped:  {} (already present)", style(summary.skipped).yellow());
    if summary.failed > 0 {
        println!("  Failed:   {}", style(summary.failed).red());
        for result in summary
            .results
            .iter()
            .filter(|r| r.status == DownloadStatus::Failed)
        {
            println!(
                "    {}: {}",
                result.item_id,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
    println!("  Bytes:    {}", indicatif::HumanBytes(summary.bytes));
    println!("{}", style("═".repeat(50)).dim());
}
