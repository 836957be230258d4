//! Bazaar command execution.
//!
//! This module provides a builder for invoking the `bzr` executable. Callers
//! assemble argument lists with the builders in [`crate::bzr::args`] and hand
//! them here for execution. Success or failure of an invocation is surfaced
//! once, synchronously; retry policy belongs to the caller.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use tracing::debug;

/// Builder for bzr invocations with an optional working directory.
#[derive(Debug)]
pub struct Bzr {
	binary: String,
	cwd: Option<String>,
	args: Vec<String>,
}

impl Default for Bzr {
	fn default() -> Self {
		Self {
			binary: "bzr".to_owned(),
			cwd: None,
			args: Vec::new(),
		}
	}
}

impl Bzr {
	/// Use a specific bzr binary instead of the one found on PATH.
	pub fn binary(mut self, path: &str) -> Self {
		self.binary = path.to_owned();
		self
	}

	/// Set the current working directory for the command.
	pub fn cwd(mut self, path: &Path) -> Self {
		self.cwd = Some(path.to_string_lossy().into_owned());
		self
	}

	/// Add multiple arguments.
	pub fn args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<OsStr>,
	{
		self.args.extend(
			args.into_iter()
				.map(|s| s.as_ref().to_string_lossy().into_owned()),
		);
		self
	}

	/// Add a single argument.
	pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
		self.args.push(arg.as_ref().to_string_lossy().into_owned());
		self
	}

	/// Execute and return raw output.
	pub fn output(self) -> Result<Output> {
		let mut cmd = Command::new(&self.binary);

		if let Some(ref cwd) = self.cwd {
			cmd.current_dir(cwd);
		}
		cmd.args(&self.args);

		debug!(binary = %self.binary, args = ?self.args, "running bzr");
		cmd.output()
			.with_context(|| format!("failed to execute: {} {}", self.binary, self.args.join(" ")))
	}

	/// Execute and require success.
	pub fn run(self) -> Result<()> {
		let desc = self.args.join(" ");
		let out = self.output()?;
		if !out.status.success() {
			let stderr = String::from_utf8_lossy(&out.stderr);
			anyhow::bail!("bzr {} failed: {}", desc, stderr.trim());
		}
		Ok(())
	}

	/// Execute and return stdout as trimmed string.
	pub fn stdout(self) -> Result<String> {
		let desc = self.args.join(" ");
		let out = self.output()?;
		if !out.status.success() {
			let stderr = String::from_utf8_lossy(&out.stderr);
			anyhow::bail!("bzr {} failed: {}", desc, stderr.trim());
		}
		Ok(String::from_utf8(out.stdout)?.trim().to_string())
	}

	/// Execute and return success status (for probes where failure is a value).
	pub fn ok(self) -> Result<bool> {
		Ok(self.output()?.status.success())
	}
}

/// Create a new bzr command builder.
pub fn bzr() -> Bzr {
	Bzr::default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_binary_reports_invocation() {
		let err = bzr()
			.binary("bzr-bridge-no-such-binary")
			.args(["st"])
			.output()
			.unwrap_err();
		assert!(err.to_string().contains("failed to execute"));
	}
}
