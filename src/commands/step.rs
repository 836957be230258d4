//! Inspect a persisted make step record.
//!
//! Loads the record, restores the step, and shows what would run. With
//! `--make` a toolchain default is simulated so the full summary (including
//! the environment lookup) can be previewed outside a host session.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::build::step::{MakeStep, MakeStepRecord};
use crate::build::summary::{ProjectState, summarize};
use crate::build::toolchain::{BuildConfig, Environment, TargetOs, Toolchain};
use crate::output;

/// Toolchain stand-in described on the command line.
struct DescribedToolchain {
	command: String,
}

impl Toolchain for DescribedToolchain {
	fn make_command(&self, _environment: &Environment) -> Option<String> {
		Some(self.command.clone())
	}

	fn target_os(&self) -> TargetOs {
		if cfg!(windows) {
			TargetOs::Windows { msys: false }
		} else {
			TargetOs::Unix
		}
	}
}

pub fn run(record_path: &Path, available_targets: Vec<String>, make: Option<&str>) -> Result<()> {
	let contents = fs::read_to_string(record_path)
		.with_context(|| format!("failed to read {}", record_path.display()))?;
	let record: MakeStepRecord = serde_json::from_str(&contents)
		.with_context(|| format!("failed to parse {} as a make step record", record_path.display()))?;
	let step = MakeStep::from_record(available_targets, record);

	output::divider();
	output::heading("Make step");
	output::label_value("Targets", step.selected_targets().join(" "));
	output::label_value("Arguments", step.all_arguments());
	output::label_value("Clean step", step.is_clean());

	let Some(command) = make else {
		if step.make_command().is_empty() {
			output::note("no override command stored; pass --make to describe the toolchain default");
		} else {
			output::label_value("Command", step.make_command());
		}
		output::divider();
		return Ok(());
	};

	let toolchain = DescribedToolchain {
		command: command.to_owned(),
	};
	let config = BuildConfig {
		id: "cli".to_owned(),
		environment: std::env::vars().collect::<Environment>(),
		build_dir: std::env::current_dir().context("failed to determine current directory")?,
		active: true,
	};
	let effective = step.effective_make_command(Some(&toolchain), Some(&config));
	let state = ProjectState {
		toolchain: Some(Box::new(toolchain)),
		configs: vec![config],
	};
	output::label_value("Command", effective);
	output::label_value("Summary", summarize(&step, &state));
	output::divider();
	Ok(())
}
