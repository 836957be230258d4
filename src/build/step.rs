//! Make step state and persistence.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::toolchain::{BuildConfig, Toolchain};
use crate::shell;

/// Current version written into persisted records.
pub const RECORD_VERSION: u32 = 1;

/// Persisted shape of a make step.
///
/// Every field defaults independently, so a record written with missing keys
/// (or by an older version) still loads instead of aborting the whole
/// restore.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MakeStepRecord {
	pub version: u32,
	pub targets: Vec<String>,
	pub arguments: String,
	pub command: String,
	pub clean: bool,
}

/// User-editable make invocation inside a build pipeline.
#[derive(Debug, Clone, Default)]
pub struct MakeStep {
	available_targets: Vec<String>,
	selected_targets: Vec<String>,
	make_arguments: String,
	make_command: String,
	clean: bool,
}

impl MakeStep {
	pub fn new(available_targets: Vec<String>) -> Self {
		Self {
			available_targets,
			..Self::default()
		}
	}

	/// Convenience constructor selecting one target up front.
	pub fn with_target(available_targets: Vec<String>, target: &str) -> Self {
		let mut step = Self::new(available_targets);
		if !target.is_empty() {
			step.set_build_target(target, true);
		}
		step
	}

	pub fn available_targets(&self) -> &[String] {
		&self.available_targets
	}

	pub fn selected_targets(&self) -> &[String] {
		&self.selected_targets
	}

	pub fn builds_target(&self, target: &str) -> bool {
		self.selected_targets.iter().any(|t| t == target)
	}

	/// Add or remove a target from the selection; re-adding is a no-op.
	pub fn set_build_target(&mut self, target: &str, on: bool) {
		if on && !self.builds_target(target) {
			self.selected_targets.push(target.to_owned());
		} else if !on {
			self.selected_targets.retain(|t| t != target);
		}
	}

	pub fn user_arguments(&self) -> &str {
		&self.make_arguments
	}

	pub fn set_user_arguments(&mut self, arguments: &str) {
		self.make_arguments = arguments.to_owned();
	}

	/// The override command; empty means "use the toolchain default".
	pub fn make_command(&self) -> &str {
		&self.make_command
	}

	pub fn set_make_command(&mut self, command: &str) {
		self.make_command = command.to_owned();
	}

	pub fn is_clean(&self) -> bool {
		self.clean
	}

	pub fn set_clean(&mut self, clean: bool) {
		self.clean = clean;
	}

	/// Free-form arguments followed by one quoted token per selected target.
	pub fn all_arguments(&self) -> String {
		shell::append(&self.make_arguments, &self.selected_targets)
	}

	/// Resolve the command to run: the override verbatim when set, otherwise
	/// the toolchain default for the configuration's environment. Missing
	/// toolchain or configuration resolves to an empty string; callers turn
	/// that into a display condition, not an error.
	pub fn effective_make_command(
		&self,
		toolchain: Option<&dyn Toolchain>,
		config: Option<&BuildConfig>,
	) -> String {
		if !self.make_command.is_empty() {
			return self.make_command.clone();
		}
		match (toolchain, config) {
			(Some(toolchain), Some(config)) => {
				toolchain.make_command(&config.environment).unwrap_or_default()
			}
			_ => String::new(),
		}
	}

	pub fn to_record(&self) -> MakeStepRecord {
		MakeStepRecord {
			version: RECORD_VERSION,
			targets: self.selected_targets.clone(),
			arguments: self.make_arguments.clone(),
			command: self.make_command.clone(),
			clean: self.clean,
		}
	}

	/// Restore from a persisted record. Unknown future versions are loaded
	/// as-is with a warning; missing fields have already been defaulted by
	/// the record's deserialization.
	pub fn from_record(available_targets: Vec<String>, record: MakeStepRecord) -> Self {
		if record.version > RECORD_VERSION {
			warn!(
				version = record.version,
				supported = RECORD_VERSION,
				"make step record written by a newer version"
			);
		}
		let mut step = Self::new(available_targets);
		for target in &record.targets {
			step.set_build_target(target, true);
		}
		step.make_arguments = record.arguments;
		step.make_command = record.command;
		step.clean = record.clean;
		step
	}
}
