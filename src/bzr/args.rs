//! Argument-list construction for bzr operations.
//!
//! Each operation takes its positional inputs plus a closed set of typed
//! options and produces the exact argument vector `bzr` expects. Ordering
//! matters: option flags come first, positionals last. The option
//! vocabularies are per-operation enums, so passing an option the operation
//! does not support is unrepresentable rather than a runtime assertion.

/// Options accepted when branching a repository (`bzr branch`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneOption {
	UseExistingDir(bool),
	Stacked(bool),
	Standalone(bool),
	Bind(bool),
	Switch(bool),
	Hardlink(bool),
	NoTree(bool),
	Revision(String),
}

/// Options accepted by `bzr pull`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullOption {
	Remember(bool),
	Overwrite(bool),
	Revision(String),
	Local(bool),
}

/// Options accepted by `bzr push`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOption {
	Remember(bool),
	Overwrite(bool),
	Revision(String),
	UseExistingDir(bool),
	CreatePrefix(bool),
}

/// Options accepted by `bzr commit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOption {
	Author(String),
	Fixes(Vec<String>),
	Local(bool),
}

/// Pre-formed extra arguments for diff and log, appended verbatim in caller
/// order. The diff re-run path synthesizes a `Single` entry for
/// `--diff-options=...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraOption {
	Single(String),
	Many(Vec<String>),
}

/// Append `flag` only when the option is enabled.
fn push_flag(args: &mut Vec<String>, enabled: bool, flag: &str) {
	if enabled {
		args.push(flag.to_owned());
	}
}

/// Append `-r <revision>` as two adjacent tokens; an empty revision appends
/// nothing.
fn push_revision(args: &mut Vec<String>, revision: &str) {
	if !revision.is_empty() {
		args.push("-r".to_owned());
		args.push(revision.to_owned());
	}
}

pub fn clone_arguments(src_location: &str, dst_location: &str, options: &[CloneOption]) -> Vec<String> {
	let mut args = Vec::new();
	for option in options {
		match option {
			CloneOption::UseExistingDir(on) => push_flag(&mut args, *on, "--use-existing-dir"),
			CloneOption::Stacked(on) => push_flag(&mut args, *on, "--stacked"),
			CloneOption::Standalone(on) => push_flag(&mut args, *on, "--standalone"),
			CloneOption::Bind(on) => push_flag(&mut args, *on, "--bind"),
			CloneOption::Switch(on) => push_flag(&mut args, *on, "--switch"),
			CloneOption::Hardlink(on) => push_flag(&mut args, *on, "--hardlink"),
			CloneOption::NoTree(on) => push_flag(&mut args, *on, "--no-tree"),
			CloneOption::Revision(revision) => push_revision(&mut args, revision),
		}
	}
	args.push(src_location.to_owned());
	if !dst_location.is_empty() {
		args.push(dst_location.to_owned());
	}
	args
}

pub fn pull_arguments(src_location: &str, options: &[PullOption]) -> Vec<String> {
	let mut args = Vec::new();
	for option in options {
		match option {
			PullOption::Remember(on) => push_flag(&mut args, *on, "--remember"),
			PullOption::Overwrite(on) => push_flag(&mut args, *on, "--overwrite"),
			PullOption::Revision(revision) => push_revision(&mut args, revision),
			PullOption::Local(on) => push_flag(&mut args, *on, "--local"),
		}
	}
	if !src_location.is_empty() {
		args.push(src_location.to_owned());
	}
	args
}

pub fn push_arguments(dst_location: &str, options: &[PushOption]) -> Vec<String> {
	let mut args = Vec::new();
	for option in options {
		match option {
			PushOption::Remember(on) => push_flag(&mut args, *on, "--remember"),
			PushOption::Overwrite(on) => push_flag(&mut args, *on, "--overwrite"),
			PushOption::Revision(revision) => push_revision(&mut args, revision),
			PushOption::UseExistingDir(on) => push_flag(&mut args, *on, "--use-existing-dir"),
			PushOption::CreatePrefix(on) => push_flag(&mut args, *on, "--create-prefix"),
		}
	}
	if !dst_location.is_empty() {
		args.push(dst_location.to_owned());
	}
	args
}

/// The commit message always travels through a file (`-F`), never inline.
pub fn commit_arguments(files: &[String], message_file: &str, options: &[CommitOption]) -> Vec<String> {
	let mut args = Vec::new();
	for option in options {
		match option {
			CommitOption::Author(author) => {
				if !author.is_empty() {
					args.push(format!("--author={author}"));
				}
			}
			CommitOption::Fixes(fixes) => {
				for fix in fixes {
					if !fix.is_empty() {
						args.push("--fixes".to_owned());
						args.push(fix.clone());
					}
				}
			}
			CommitOption::Local(on) => push_flag(&mut args, *on, "--local"),
		}
	}
	args.push("-F".to_owned());
	args.push(message_file.to_owned());
	args.extend(files.iter().cloned());
	args
}

pub fn add_arguments(files: &[String]) -> Vec<String> {
	files.to_vec()
}

pub fn update_arguments(revision: &str) -> Vec<String> {
	let mut args = Vec::new();
	push_revision(&mut args, revision);
	args
}

pub fn revert_arguments(file: &str, revision: &str) -> Vec<String> {
	let mut args = Vec::new();
	push_revision(&mut args, revision);
	if !file.is_empty() {
		args.push(file.to_owned());
	}
	args
}

pub fn revert_all_arguments(revision: &str) -> Vec<String> {
	update_arguments(revision)
}

pub fn annotate_arguments(file: &str, revision: &str) -> Vec<String> {
	let mut args = vec!["--long".to_owned()];
	push_revision(&mut args, revision);
	args.push(file.to_owned());
	args
}

pub fn diff_arguments(files: &[String], extras: &[ExtraOption]) -> Vec<String> {
	let mut args = Vec::new();
	for extra in extras {
		match extra {
			ExtraOption::Single(value) => args.push(value.clone()),
			ExtraOption::Many(values) => args.extend(values.iter().cloned()),
		}
	}
	args.extend(files.iter().cloned());
	args
}

pub fn log_arguments(files: &[String], extras: &[ExtraOption]) -> Vec<String> {
	diff_arguments(files, extras)
}

pub fn status_arguments(file: &str) -> Vec<String> {
	let mut args = vec!["--short".to_owned()];
	if !file.is_empty() {
		args.push(file.to_owned());
	}
	args
}

/// Viewing a single revision is `log -p -v` pinned to that revision, so the
/// subcommand name is part of the argument list here.
pub fn view_arguments(revision: &str) -> Vec<String> {
	vec![
		"log".to_owned(),
		"-p".to_owned(),
		"-v".to_owned(),
		"-r".to_owned(),
		revision.to_owned(),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn s(value: &str) -> String {
		value.to_owned()
	}

	#[test]
	fn test_disabled_flags_leave_arguments_untouched() {
		let options = [
			CloneOption::UseExistingDir(false),
			CloneOption::Stacked(false),
			CloneOption::Standalone(false),
			CloneOption::Bind(false),
			CloneOption::Switch(false),
			CloneOption::Hardlink(false),
			CloneOption::NoTree(false),
		];
		assert_eq!(clone_arguments("src", "", &options), vec![s("src")]);
	}

	#[test]
	fn test_enabled_flags_precede_positionals() {
		let options = [CloneOption::Stacked(true), CloneOption::NoTree(true)];
		assert_eq!(
			clone_arguments("lp:foo", "foo", &options),
			vec![s("--stacked"), s("--no-tree"), s("lp:foo"), s("foo")]
		);
	}

	#[test]
	fn test_empty_revision_appends_nothing() {
		assert!(update_arguments("").is_empty());
		assert_eq!(
			pull_arguments("", &[PullOption::Revision(String::new())]),
			Vec::<String>::new()
		);
	}

	#[test]
	fn test_revision_appends_two_adjacent_tokens() {
		assert_eq!(update_arguments("42"), vec![s("-r"), s("42")]);
		assert_eq!(
			pull_arguments("lp:foo", &[PullOption::Revision(s("-3"))]),
			vec![s("-r"), s("-3"), s("lp:foo")]
		);
	}

	#[test]
	fn test_pull_local_flag() {
		assert_eq!(
			pull_arguments("", &[PullOption::Local(true), PullOption::Overwrite(true)]),
			vec![s("--local"), s("--overwrite")]
		);
	}

	#[test]
	fn test_push_specific_flags() {
		assert_eq!(
			push_arguments(
				"lp:bar",
				&[
					PushOption::UseExistingDir(true),
					PushOption::CreatePrefix(true),
					PushOption::Remember(false),
				]
			),
			vec![s("--use-existing-dir"), s("--create-prefix"), s("lp:bar")]
		);
	}

	#[test]
	fn test_commit_message_file_and_files_trail_options() {
		let files = [s("a.txt"), s("b.txt")];
		let options = [
			CommitOption::Author(s("Jo <jo@example.com>")),
			CommitOption::Fixes(vec![s("lp:1"), String::new(), s("lp:2")]),
			CommitOption::Local(true),
		];
		assert_eq!(
			commit_arguments(&files, "/tmp/msg", &options),
			vec![
				s("--author=Jo <jo@example.com>"),
				s("--fixes"),
				s("lp:1"),
				s("--fixes"),
				s("lp:2"),
				s("--local"),
				s("-F"),
				s("/tmp/msg"),
				s("a.txt"),
				s("b.txt"),
			]
		);
	}

	#[test]
	fn test_empty_author_is_skipped() {
		assert_eq!(
			commit_arguments(&[], "msg", &[CommitOption::Author(String::new())]),
			vec![s("-F"), s("msg")]
		);
	}

	#[test]
	fn test_annotate_leads_with_long() {
		assert_eq!(
			annotate_arguments("src/lib.rs", "7"),
			vec![s("--long"), s("-r"), s("7"), s("src/lib.rs")]
		);
		assert_eq!(annotate_arguments("x", ""), vec![s("--long"), s("x")]);
	}

	#[test]
	fn test_diff_extras_keep_caller_order() {
		let extras = [
			ExtraOption::Many(vec![s("-r"), s("1..2")]),
			ExtraOption::Single(s("--diff-options=-w")),
		];
		assert_eq!(
			diff_arguments(&[s("f.c")], &extras),
			vec![s("-r"), s("1..2"), s("--diff-options=-w"), s("f.c")]
		);
	}

	#[test]
	fn test_status_is_short() {
		assert_eq!(status_arguments(""), vec![s("--short")]);
		assert_eq!(status_arguments("f"), vec![s("--short"), s("f")]);
	}

	#[test]
	fn test_view_pins_revision() {
		assert_eq!(
			view_arguments("5"),
			vec![s("log"), s("-p"), s("-v"), s("-r"), s("5")]
		);
	}
}
