//! Pure formatting functions for UI output.
//!
//! Colors come from `console`, which drops them when the stream is not a terminal
//! (CI logs stay readable).

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a non-fatal warning in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a titled list of tags, one per line.
pub fn display_tag_list(title: &str, tags: &[String]) {
    println!("{}", style(title).bold());
    println!("{}", format_tag_list(tags));
}

/// Render tags as an indented list, or a placeholder when there are none.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "  (none)".to_string();
    }
    tags.iter()
        .map(|tag| format!("  - {}", tag))
        .collect::<Vec<_>>()
        .join("\n")
}
