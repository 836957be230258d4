//! Parsing of `bzr status --short` output.

use std::fmt;

/// Coarse classification of one short-status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
	Versioned,
	Unversioned,
	Renamed,
	Unknown,
	Nonexistent,
	Conflict,
	PendingMerge,
	Created,
	Deleted,
	KindChanged,
	Modified,
	ExecuteBitChanged,
}

impl fmt::Display for FileState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			FileState::Versioned => "Versioned",
			FileState::Unversioned => "Unversioned",
			FileState::Renamed => "Renamed",
			FileState::Unknown => "Unknown",
			FileState::Nonexistent => "Nonexistent",
			FileState::Conflict => "Conflict",
			FileState::PendingMerge => "PendingMerge",
			FileState::Created => "Created",
			FileState::Deleted => "Deleted",
			FileState::KindChanged => "KindChanged",
			FileState::Modified => "Modified",
			FileState::ExecuteBitChanged => "ExecuteBitChanged",
		};
		f.write_str(label)
	}
}

/// One parsed status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusEntry {
	pub state: Option<FileState>,
	pub path: String,
}

/// Parse one line of `--short` output.
///
/// The first three columns carry versioning, content, and execute-bit codes.
/// When more than one column is set, the later column wins. The path starts
/// at byte offset 4; shorter lines yield an empty path rather than an error.
pub fn parse_status_line(line: &str) -> StatusEntry {
	let mut entry = StatusEntry::default();
	if line.is_empty() {
		return entry;
	}

	let bytes = line.as_bytes();
	entry.state = match bytes[0] {
		b'+' => Some(FileState::Versioned),
		b'-' => Some(FileState::Unversioned),
		b'R' => Some(FileState::Renamed),
		b'?' => Some(FileState::Unknown),
		b'X' => Some(FileState::Nonexistent),
		b'C' => Some(FileState::Conflict),
		b'P' => Some(FileState::PendingMerge),
		_ => None,
	};
	if bytes.len() >= 2 {
		entry.state = match bytes[1] {
			b'N' => Some(FileState::Created),
			b'D' => Some(FileState::Deleted),
			b'K' => Some(FileState::KindChanged),
			b'M' => Some(FileState::Modified),
			_ => entry.state,
		};
	}
	if bytes.len() >= 3 && bytes[2] == b'*' {
		entry.state = Some(FileState::ExecuteBitChanged);
	}

	entry.path = line.get(4..).unwrap_or_default().to_owned();
	entry
}

/// Parse a whole `--short` output block, skipping empty lines.
pub fn parse_status_output(output: &str) -> Vec<StatusEntry> {
	output
		.lines()
		.filter(|line| !line.is_empty())
		.map(parse_status_line)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_line_is_empty_entry() {
		assert_eq!(parse_status_line(""), StatusEntry::default());
	}

	#[test]
	fn test_version_column() {
		let entry = parse_status_line("?   junk.o");
		assert_eq!(entry.state, Some(FileState::Unknown));
		assert_eq!(entry.path, "junk.o");

		assert_eq!(parse_status_line("+").state, Some(FileState::Versioned));
		assert_eq!(parse_status_line("-").state, Some(FileState::Unversioned));
		assert_eq!(parse_status_line("R").state, Some(FileState::Renamed));
		assert_eq!(parse_status_line("X").state, Some(FileState::Nonexistent));
		assert_eq!(parse_status_line("C").state, Some(FileState::Conflict));
		assert_eq!(parse_status_line("P").state, Some(FileState::PendingMerge));
	}

	#[test]
	fn test_content_column_overrides_version_column() {
		let entry = parse_status_line("+N  foo.txt");
		assert_eq!(entry.state, Some(FileState::Created));
		assert_eq!(entry.state.unwrap().to_string(), "Created");
		assert_eq!(entry.path, "foo.txt");

		assert_eq!(parse_status_line("+D  f").state, Some(FileState::Deleted));
		assert_eq!(parse_status_line("+K  f").state, Some(FileState::KindChanged));
		assert_eq!(parse_status_line("+M  f").state, Some(FileState::Modified));
	}

	#[test]
	fn test_exec_column_overrides_both() {
		let entry = parse_status_line("+M* tool.sh");
		assert_eq!(entry.state, Some(FileState::ExecuteBitChanged));
		assert_eq!(entry.path, "tool.sh");
	}

	#[test]
	fn test_short_line_yields_empty_path() {
		let entry = parse_status_line("+N");
		assert_eq!(entry.state, Some(FileState::Created));
		assert_eq!(entry.path, "");
	}

	#[test]
	fn test_block_parsing_skips_blank_lines() {
		let entries = parse_status_output("+M  a.rs\n\n?   b.rs\n");
		assert_eq!(entries.len(), 2);
		assert_eq!(entries[0].path, "a.rs");
		assert_eq!(entries[1].state, Some(FileState::Unknown));
	}
}
