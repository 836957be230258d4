//! Derived summary of the effective make command line.
//!
//! The summary is recomputed push-based: the watcher subscribes to project
//! change notifications and refreshes only when the change affects the
//! active configuration. Missing collaborators degrade to explanatory
//! placeholder text, never to an error.

use std::path::Path;

use tracing::debug;

use super::events::BuildEvent;
use super::step::MakeStep;
use super::toolchain::{BuildConfig, Environment, TargetOs, Toolchain};

/// Live project state the summary depends on.
pub struct ProjectState {
	pub toolchain: Option<Box<dyn Toolchain>>,
	pub configs: Vec<BuildConfig>,
}

impl ProjectState {
	pub fn active_config(&self) -> Option<&BuildConfig> {
		self.configs.iter().find(|config| config.active)
	}

	fn config(&self, id: &str) -> Option<&BuildConfig> {
		self.configs.iter().find(|config| config.id == id)
	}
}

/// Compute the human-readable summary for a step under the given state.
pub fn summarize(step: &MakeStep, state: &ProjectState) -> String {
	let Some(toolchain) = state.toolchain.as_deref() else {
		return "Make: no toolchain set up in the kit.".to_owned();
	};
	let Some(config) = state.active_config() else {
		return "Make: no build configuration.".to_owned();
	};

	let command = step.effective_make_command(Some(toolchain), Some(config));
	let environment = prepare_environment(step, toolchain, config);
	if !command_in_environment(&environment, &command) {
		return format!("Make: {command} not found in the environment.");
	}

	let arguments = step.all_arguments();
	let invocation = if arguments.is_empty() {
		command
	} else {
		format!("{command} {arguments}")
	};
	format!("{invocation} in {}", config.build_dir.display())
}

/// Build the environment the make tool would run under.
///
/// On Windows toolchains outside MSYS, `MAKEFLAGS` gets an `L` prefix to
/// keep nmake/jom quiet, but only when the user has not overridden the
/// command.
pub fn prepare_environment(step: &MakeStep, toolchain: &dyn Toolchain, config: &BuildConfig) -> Environment {
	let mut environment = config.environment.clone();
	if step.make_command().is_empty()
		&& let TargetOs::Windows { msys: false } = toolchain.target_os()
	{
		environment.prepend("MAKEFLAGS", "L");
	}
	environment
}

/// Check whether `command` can be located through the environment: a path is
/// probed directly, a bare name is searched along the environment's PATH.
fn command_in_environment(environment: &Environment, command: &str) -> bool {
	if command.is_empty() {
		return false;
	}
	let path = Path::new(command);
	if path.is_absolute() || command.contains(std::path::MAIN_SEPARATOR) {
		return path.exists();
	}
	let Some(search) = environment.get("PATH") else {
		return false;
	};
	std::env::split_paths(search).any(|dir| dir.join(command).is_file())
}

/// Recomputes the summary in response to project change notifications.
///
/// Config-scoped events refresh only when they name the active
/// configuration; a kit change always refreshes. No-change refreshes are
/// suppressed so downstream display code is not poked needlessly.
pub struct SummaryWatcher {
	step: MakeStep,
	state: ProjectState,
	summary: String,
}

impl SummaryWatcher {
	pub fn new(step: MakeStep, state: ProjectState) -> Self {
		let summary = summarize(&step, &state);
		Self { step, state, summary }
	}

	pub fn summary(&self) -> &str {
		&self.summary
	}

	pub fn step(&self) -> &MakeStep {
		&self.step
	}

	/// Mutate the step; call [`SummaryWatcher::refresh`] afterwards.
	pub fn step_mut(&mut self) -> &mut MakeStep {
		&mut self.step
	}

	pub fn state_mut(&mut self) -> &mut ProjectState {
		&mut self.state
	}

	/// React to one change notification. Returns whether the summary
	/// actually changed.
	pub fn handle_event(&mut self, event: &BuildEvent) -> bool {
		let relevant = match event {
			BuildEvent::KitChanged => true,
			BuildEvent::EnvironmentChanged { config_id }
			| BuildEvent::BuildDirectoryChanged { config_id }
			| BuildEvent::ActiveConfigChanged { config_id } => self
				.state
				.config(config_id)
				.is_some_and(|config| config.active),
		};
		if !relevant {
			debug!(?event, "ignoring event for inactive configuration");
			return false;
		}
		self.refresh()
	}

	/// Recompute the summary. Returns whether it changed.
	pub fn refresh(&mut self) -> bool {
		let updated = summarize(&self.step, &self.state);
		if updated == self.summary {
			return false;
		}
		self.summary = updated;
		true
	}
}
