//! Client settings.
//!
//! Loaded from an optional JSON file; environment overrides are applied on
//! top so a shell session can redirect the binary or identity without
//! touching the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings for driving the bzr executable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BzrSettings {
	/// Binary to invoke; a bare name is resolved through PATH.
	pub binary_path: String,
	pub user_name: String,
	pub email: String,
	/// Default `--limit` for log output; 0 means unlimited.
	pub log_count: u32,
}

impl Default for BzrSettings {
	fn default() -> Self {
		Self {
			binary_path: "bzr".to_owned(),
			user_name: String::new(),
			email: String::new(),
			log_count: 100,
		}
	}
}

impl BzrSettings {
	/// Load settings from a JSON file, then apply environment overrides
	/// (`BZR_BRIDGE_BIN`, `BZR_BRIDGE_USER`, `BZR_BRIDGE_EMAIL`).
	///
	/// A missing file yields defaults; a malformed file is an error.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let mut settings = match path {
			Some(path) if path.exists() => {
				let contents = fs::read_to_string(path)
					.with_context(|| format!("failed to read {}", path.display()))?;
				serde_json::from_str(&contents)
					.with_context(|| format!("failed to parse {} as JSON", path.display()))?
			}
			_ => Self::default(),
		};
		settings.apply_env_overrides();
		Ok(settings)
	}

	fn apply_env_overrides(&mut self) {
		if let Some(binary) = env_value("BZR_BRIDGE_BIN") {
			self.binary_path = binary;
		}
		if let Some(user) = env_value("BZR_BRIDGE_USER") {
			self.user_name = user;
		}
		if let Some(email) = env_value("BZR_BRIDGE_EMAIL") {
			self.email = email;
		}
	}

	/// `Name <email>` identity handed to `bzr whoami`.
	pub fn user_id(&self) -> String {
		format!("{} <{}>", self.user_name, self.email)
	}
}

fn env_value(key: &str) -> Option<String> {
	std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::{Mutex, MutexGuard};
	use tempfile::TempDir;

	/// `load` reads process-global environment variables, so tests touching
	/// or depending on them take this lock.
	fn env_lock() -> MutexGuard<'static, ()> {
		static LOCK: Mutex<()> = Mutex::new(());
		LOCK.lock().unwrap_or_else(|err| err.into_inner())
	}

	#[test]
	fn test_missing_file_gives_defaults() {
		let _guard = env_lock();
		let settings = BzrSettings::load(None).unwrap();
		assert_eq!(settings.binary_path, "bzr");
		assert_eq!(settings.log_count, 100);
	}

	#[test]
	fn test_partial_file_defaults_the_rest() {
		let _guard = env_lock();
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");
		fs::write(&path, r#"{"user_name": "Jo", "email": "jo@example.com"}"#).unwrap();

		let settings = BzrSettings::load(Some(&path)).unwrap();
		assert_eq!(settings.user_id(), "Jo <jo@example.com>");
		assert_eq!(settings.binary_path, "bzr");
	}

	#[test]
	fn test_env_override_wins_over_file() {
		let _guard = env_lock();
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");
		fs::write(&path, r#"{"binary_path": "/opt/bzr", "user_name": "Jo"}"#).unwrap();

		unsafe { std::env::set_var("BZR_BRIDGE_BIN", "/env/bzr") };
		let overridden = BzrSettings::load(Some(&path));
		unsafe { std::env::remove_var("BZR_BRIDGE_BIN") };

		let overridden = overridden.unwrap();
		assert_eq!(overridden.binary_path, "/env/bzr");
		// Untouched fields still come from the file.
		assert_eq!(overridden.user_name, "Jo");

		// Without the variable the file value is back in charge.
		let plain = BzrSettings::load(Some(&path)).unwrap();
		assert_eq!(plain.binary_path, "/opt/bzr");
	}

	#[test]
	fn test_malformed_file_is_an_error() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("settings.json");
		fs::write(&path, "{not json").unwrap();
		assert!(BzrSettings::load(Some(&path)).is_err());
	}
}
