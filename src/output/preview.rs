//! Preview rendering and the interactive selection prompt.

use std::io;

use console::style;

use crate::error::{Error, Result};
use crate::media::{parse_command, Command, MediaItem, Selection};
use crate::output::console::print_warning;
use crate::post::InvalidUrl;

/// Print rejected input tokens.
pub fn render_invalid(invalid: &[InvalidUrl]) {
    for entry in invalid {
        println!(
            "{} {} ({})",
            style("SKIP").yellow().bold(),
            entry.input,
            entry.reason
        );
    }
}

/// Format one preview line: number, checkbox, kind label, file and preview URL.
pub fn format_item(position: usize, item: &MediaItem, selected: bool) -> String {
    let checkbox = if selected { "[x]" } else { "[ ]" };
    let label = if item.is_video() { "[Video] " } else { "" };
    format!(
        "{:>3}. {} {}{}/{}  {}",
        position + 1,
        checkbox,
        label,
        item.shortcode,
        item.file_name(),
        item.preview_url
    )
}

/// Print every item with its selection state, grouped by post.
pub fn render_items(items: &[MediaItem], selection: &Selection) {
    let mut current_post: Option<&str> = None;

    for (position, item) in items.iter().enumerate() {
        if current_post != Some(item.origin_url.as_str()) {
            current_post = Some(item.origin_url.as_str());
            println!();
            println!("{}", style(&item.origin_url).bold());
        }

        let line = format_item(position, item, selection.is_selected(position));
        if selection.is_selected(position) {
            println!("{}", line);
        } else {
            println!("{}", style(line).dim());
        }
    }

    println!();
    println!("{} of {} selected", selection.count(), selection.len());
}

/// Let the user adjust `selection` until they confirm.
///
/// `read_line` returns `None` at end of input, which confirms. Returns
/// `Error::Aborted` when the user quits.
pub fn prompt_selection<F>(
    items: &[MediaItem],
    selection: &mut Selection,
    mut read_line: F,
) -> Result<()>
where
    F: FnMut() -> io::Result<Option<String>>,
{
    loop {
        render_items(items, selection);
        println!(
            "{}",
            style("Enter numbers (1,3-5), !n to toggle, all, none; Enter to download, q to quit")
                .dim()
        );

        let Some(line) = read_line()? else {
            return Ok(());
        };

        match parse_command(&line, items.len()) {
            Ok(Command::Confirm) => return Ok(()),
            Ok(Command::Abort) => return Err(Error::Aborted),
            Ok(command) => selection.apply(&command),
            Err(e) => print_warning(&e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    fn items() -> Vec<MediaItem> {
        (0..3)
            .map(|ordinal| MediaItem {
                shortcode: "ABC123".into(),
                ordinal,
                kind: if ordinal == 1 {
                    MediaKind::Video
                } else {
                    MediaKind::Image
                },
                source_url: format!("https://cdn/{}", ordinal),
                preview_url: format!("https://cdn/{}.jpg", ordinal),
                origin_url: "https://www.instagram.com/p/ABC123/".into(),
            })
            .collect()
    }

    fn scripted(lines: &[&str]) -> impl FnMut() -> io::Result<Option<String>> {
        let mut lines: Vec<String> = lines.iter().rev().map(|s| s.to_string()).collect();
        move || Ok(lines.pop())
    }

    #[test]
    fn test_format_item_marks_video_and_checkbox() {
        let items = items();
        assert_eq!(
            format_item(1, &items[1], true),
            "  2. [x] [Video] ABC123/1.mp4  https://cdn/1.jpg"
        );
        assert!(format_item(0, &items[0], false).contains("[ ] ABC123/0.jpg"));
    }

    #[test]
    fn test_prompt_applies_commands_until_confirm() {
        let items = items();
        let mut selection = Selection::new(items.len());

        prompt_selection(&items, &mut selection, scripted(&["none", "bogus", "3", "!1", ""]))
            .unwrap();

        assert_eq!(selection.selected(), &[2, 0]);
    }

    #[test]
    fn test_prompt_end_of_input_confirms_default() {
        let items = items();
        let mut selection = Selection::new(items.len());

        prompt_selection(&items, &mut selection, scripted(&[])).unwrap();
        assert_eq!(selection.count(), 3);
    }

    #[test]
    fn test_prompt_quit_aborts() {
        let items = items();
        let mut selection = Selection::new(items.len());

        let result = prompt_selection(&items, &mut selection, scripted(&["q"]));
        assert!(matches!(result, Err(Error::Aborted)));
    }
}
