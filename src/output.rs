//! Terminal output helpers for the CLI. Status goes to stderr so command
//! output on stdout stays pipeable.

use owo_colors::OwoColorize;

pub fn divider() {
	eprintln!("{}", "─".repeat(48).dimmed());
}

pub fn heading(text: &str) {
	eprintln!("{}", text.bold().cyan());
}

pub fn note(text: &str) {
	eprintln!("{}", text.dimmed());
}

pub fn label_value(label: &str, value: impl std::fmt::Display) {
	eprintln!("{} {}", format!("{label}:").bold(), value);
}

/// One status/listing row, e.g. `Modified  src/main.c`.
pub fn entry(tag: &str, value: &str) {
	println!("{} {}", row_tag(tag).yellow(), value);
}

/// Pad the classification column to a fixed width. Padding happens before
/// coloring so escape codes do not count against the width. An empty tag
/// renders as `-`.
fn row_tag(tag: &str) -> String {
	let tag = if tag.is_empty() { "-" } else { tag };
	format!("{tag:<18}")
}

pub fn success(message: &str) {
	eprintln!("{} {}", "✓".green().bold(), message.green());
}

pub fn warn(message: &str) {
	eprintln!("{} {}", "!".yellow().bold(), message.yellow());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_row_tag_pads_to_fixed_width() {
		assert_eq!(row_tag("Modified"), "Modified          ");
		assert_eq!(row_tag("ExecuteBitChanged"), "ExecuteBitChanged ");
	}

	#[test]
	fn test_row_tag_empty_renders_dash() {
		assert_eq!(row_tag(""), "-                 ");
	}
}
