//! Collaborator seams for the surrounding build system.
//!
//! The host owns kits, toolchains, and build configurations; the build step
//! only consumes them through the interfaces here.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Process environment handed to the toolchain and the spawned tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment(BTreeMap<String, String>);

impl Environment {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	pub fn set(&mut self, key: &str, value: impl Into<String>) {
		self.0.insert(key.to_owned(), value.into());
	}

	/// Prefix an existing value, or set the prefix alone when absent.
	pub fn prepend(&mut self, key: &str, prefix: &str) {
		let value = format!("{prefix}{}", self.get(key).unwrap_or_default());
		self.set(key, value);
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl FromIterator<(String, String)> for Environment {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Flavor of the toolchain's target platform, as far as make cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOs {
	Unix,
	Windows { msys: bool },
}

/// The host's toolchain abstraction, reduced to what the make step consumes.
pub trait Toolchain {
	/// Default make tool for this toolchain under the given environment, or
	/// `None` when the toolchain has no opinion.
	fn make_command(&self, environment: &Environment) -> Option<String>;

	fn target_os(&self) -> TargetOs;
}

/// One build configuration of the active project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
	pub id: String,
	pub environment: Environment,
	pub build_dir: PathBuf,
	pub active: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_prepend_with_and_without_existing_value() {
		let mut env = Environment::new();
		env.prepend("MAKEFLAGS", "L");
		assert_eq!(env.get("MAKEFLAGS"), Some("L"));

		env.set("MAKEFLAGS", "kj4");
		env.prepend("MAKEFLAGS", "L");
		assert_eq!(env.get("MAKEFLAGS"), Some("Lkj4"));
	}
}
