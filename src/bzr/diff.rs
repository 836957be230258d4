//! Diff re-run coordination.
//!
//! An open diff view keeps a snapshot of the parameters that produced it, so
//! toggling formatting flags re-issues the same diff with adjusted options
//! instead of rebuilding the whole logical command. Dispatch is synchronous
//! and single-threaded; the last requested re-run wins.

use std::path::PathBuf;

use tracing::debug;

use super::args::ExtraOption;

/// Immutable snapshot of a diff invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffParameters {
	pub working_dir: PathBuf,
	pub files: Vec<String>,
	pub extras: Vec<ExtraOption>,
}

/// Formatting toggles exposed by the diff view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffFormatFlags {
	pub ignore_whitespace: bool,
	pub ignore_blank_lines: bool,
}

impl DiffFormatFlags {
	fn tokens(self) -> Vec<&'static str> {
		let mut tokens = Vec::new();
		if self.ignore_whitespace {
			tokens.push("-w");
		}
		if self.ignore_blank_lines {
			tokens.push("-B");
		}
		tokens
	}
}

type RerunCallback = Box<dyn Fn(&DiffParameters)>;

/// Re-runs a captured diff whenever its formatting flags change.
pub struct DiffController {
	parameters: DiffParameters,
	listeners: Vec<RerunCallback>,
}

impl DiffController {
	pub fn new(parameters: DiffParameters) -> Self {
		Self {
			parameters,
			listeners: Vec::new(),
		}
	}

	/// Register a callback invoked with the effective parameters on each
	/// re-run.
	pub fn on_rerun(&mut self, callback: impl Fn(&DiffParameters) + 'static) {
		self.listeners.push(Box::new(callback));
	}

	/// Derive the parameters a re-run with `flags` would use.
	///
	/// With no flags set the original snapshot is reproduced unchanged.
	/// Otherwise exactly one extra option is appended; bzr wants the joined
	/// form `--diff-options=-w -B`.
	pub fn effective_parameters(&self, flags: DiffFormatFlags) -> DiffParameters {
		let mut effective = self.parameters.clone();
		let tokens = flags.tokens();
		if !tokens.is_empty() {
			effective
				.extras
				.push(ExtraOption::Single(format!("--diff-options={}", tokens.join(" "))));
		}
		effective
	}

	/// Re-issue the diff with the given flags.
	pub fn rerun(&self, flags: DiffFormatFlags) {
		let effective = self.effective_parameters(flags);
		debug!(working_dir = %effective.working_dir.display(), "re-running diff");
		for listener in &self.listeners {
			listener(&effective);
		}
	}
}
