//! High-level client for executing bzr operations.
//!
//! Pairs the argument builders in [`crate::bzr::args`] with the command
//! builder in [`crate::bzr::cmd`]. Every operation is a single synchronous
//! subprocess call; the caller decides what to do with a failure.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::args::{self, CloneOption, CommitOption, ExtraOption, PullOption, PushOption};
use super::branch::{self, BranchInfo};
use super::cmd::{Bzr, bzr};
use super::diff::DiffParameters;
use super::settings::BzrSettings;
use super::status::{self, StatusEntry};

pub struct BzrClient {
	settings: BzrSettings,
}

impl BzrClient {
	pub fn new(settings: BzrSettings) -> Self {
		Self { settings }
	}

	pub fn settings(&self) -> &BzrSettings {
		&self.settings
	}

	fn command(&self, working_dir: &Path) -> Bzr {
		bzr().binary(&self.settings.binary_path).cwd(working_dir)
	}

	/// Record the configured identity via `bzr whoami`.
	pub fn set_user_id(&self, working_dir: &Path) -> Result<bool> {
		self.command(working_dir)
			.arg("whoami")
			.arg(self.settings.user_id())
			.ok()
	}

	/// Report the identity bzr currently has on record.
	pub fn user_id(&self, working_dir: &Path) -> Result<String> {
		self.command(working_dir).arg("whoami").stdout()
	}

	pub fn clone(
		&self,
		working_dir: &Path,
		src_location: &str,
		dst_location: &str,
		options: &[CloneOption],
	) -> Result<()> {
		self.command(working_dir)
			.arg("branch")
			.args(args::clone_arguments(src_location, dst_location, options))
			.run()
	}

	pub fn pull(&self, working_dir: &Path, src_location: &str, options: &[PullOption]) -> Result<()> {
		self.command(working_dir)
			.arg("pull")
			.args(args::pull_arguments(src_location, options))
			.run()
	}

	pub fn push(&self, working_dir: &Path, dst_location: &str, options: &[PushOption]) -> Result<()> {
		self.command(working_dir)
			.arg("push")
			.args(args::push_arguments(dst_location, options))
			.run()
	}

	pub fn commit(
		&self,
		working_dir: &Path,
		files: &[String],
		message_file: &str,
		options: &[CommitOption],
	) -> Result<()> {
		self.command(working_dir)
			.arg("commit")
			.args(args::commit_arguments(files, message_file, options))
			.run()
	}

	pub fn add(&self, working_dir: &Path, files: &[String]) -> Result<()> {
		self.command(working_dir)
			.arg("add")
			.args(args::add_arguments(files))
			.run()
	}

	pub fn update(&self, working_dir: &Path, revision: &str) -> Result<()> {
		self.command(working_dir)
			.arg("update")
			.args(args::update_arguments(revision))
			.run()
	}

	pub fn revert(&self, working_dir: &Path, file: &str, revision: &str) -> Result<()> {
		self.command(working_dir)
			.arg("revert")
			.args(args::revert_arguments(file, revision))
			.run()
	}

	pub fn revert_all(&self, working_dir: &Path, revision: &str) -> Result<()> {
		self.command(working_dir)
			.arg("revert")
			.args(args::revert_all_arguments(revision))
			.run()
	}

	pub fn annotate(&self, working_dir: &Path, file: &str, revision: &str) -> Result<String> {
		self.command(working_dir)
			.arg("annotate")
			.args(args::annotate_arguments(file, revision))
			.stdout()
	}

	/// Run a diff from a parameter snapshot (also the re-run entry point).
	///
	/// bzr exits non-zero when differences exist, so the exit status is not
	/// treated as failure here; stdout is returned as-is.
	pub fn diff(&self, parameters: &DiffParameters) -> Result<String> {
		let out = self
			.command(&parameters.working_dir)
			.arg("diff")
			.args(args::diff_arguments(&parameters.files, &parameters.extras))
			.output()?;
		if !out.status.success() && out.stdout.is_empty() {
			let stderr = String::from_utf8_lossy(&out.stderr);
			anyhow::bail!("bzr diff failed: {}", stderr.trim());
		}
		Ok(String::from_utf8_lossy(&out.stdout).into_owned())
	}

	pub fn log(&self, working_dir: &Path, files: &[String], extras: &[ExtraOption]) -> Result<String> {
		self.command(working_dir)
			.arg("log")
			.args(args::log_arguments(files, extras))
			.stdout()
	}

	pub fn status(&self, working_dir: &Path, file: &str) -> Result<Vec<StatusEntry>> {
		let out = self
			.command(working_dir)
			.arg("status")
			.args(args::status_arguments(file))
			.stdout()?;
		Ok(status::parse_status_output(&out))
	}

	/// Show a single revision with its diff (`log -p -v -r <rev>`); the
	/// subcommand name is part of the argument list.
	pub fn view(&self, working_dir: &Path, revision: &str) -> Result<String> {
		self.command(working_dir)
			.args(args::view_arguments(revision))
			.stdout()
	}

	pub fn branch_info(&self, repo_root: &Path) -> BranchInfo {
		branch::branch_info(repo_root)
	}

	pub fn find_repository_root(&self, path: &Path) -> Option<PathBuf> {
		branch::find_repository_root(path)
	}
}
