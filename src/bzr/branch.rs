//! Branch metadata discovery.
//!
//! Inspects the `.bzr` control directory directly: repository roots are
//! recognized by the `branch-format` marker, and bound/standalone
//! classification comes from `branch/branch.conf`. Both are recomputed per
//! query; nothing here is cached.

use std::fs;
use std::path::{Path, PathBuf};

/// Control directory at the root of a bzr repository.
pub const BZR_DIR: &str = ".bzr";

/// Marker file (relative to [`BZR_DIR`]) whose presence identifies a root.
pub const BRANCH_FORMAT_FILE: &str = "branch-format";

/// Where a branch pushes/pulls by default, and whether it is bound there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
	pub location: String,
	pub is_bound: bool,
}

/// Read `<root>/.bzr/branch/branch.conf` and classify the branch.
///
/// A branch is bound when the config carries `bound = true`; its location is
/// then the `bound_location` value. Anything else (missing file, missing
/// keys, `bound = false`) is a standalone branch rooted at `repo_root`.
pub fn branch_info(repo_root: &Path) -> BranchInfo {
	let standalone = BranchInfo {
		location: repo_root.to_string_lossy().into_owned(),
		is_bound: false,
	};

	let conf_path = repo_root.join(BZR_DIR).join("branch").join("branch.conf");
	let Ok(contents) = fs::read_to_string(&conf_path) else {
		return standalone;
	};

	let mut bound_location = String::new();
	let mut bound = String::new();
	for line in contents.lines() {
		// "bound" is a prefix of "bound_location"; the longer key is
		// matched first so the two never collide.
		if bound_location.is_empty()
			&& let Some(value) = key_value(line, "bound_location")
		{
			bound_location = value;
		} else if bound.is_empty()
			&& let Some(value) = key_value(line, "bound")
		{
			bound = value;
		}
		if !bound_location.is_empty() && !bound.is_empty() {
			break;
		}
	}

	if bound.trim().eq_ignore_ascii_case("true") {
		BranchInfo {
			location: bound_location,
			is_bound: true,
		}
	} else {
		standalone
	}
}

/// Extract the value of a `key = value` line, tolerating surrounding
/// whitespace. Returns `None` for other keys and for empty values.
fn key_value(line: &str, key: &str) -> Option<String> {
	let rest = line.trim_start().strip_prefix(key)?;
	let rest = rest.trim_start().strip_prefix('=')?;
	let value = rest.trim();
	if value.is_empty() {
		None
	} else {
		Some(value.to_owned())
	}
}

/// Walk upward from `start` looking for the repository marker file.
///
/// Anything that is not a directory (a file, or a path that no longer
/// exists) starts the walk at its parent. Returns the first ancestor
/// containing `.bzr/branch-format`, or `None` when no ancestor qualifies.
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
	let origin = if start.is_dir() { start } else { start.parent()? };
	origin
		.ancestors()
		.find(|dir| dir.join(BZR_DIR).join(BRANCH_FORMAT_FILE).is_file())
		.map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	fn write_branch_conf(root: &Path, contents: &str) {
		let branch_dir = root.join(BZR_DIR).join("branch");
		fs::create_dir_all(&branch_dir).unwrap();
		fs::write(branch_dir.join("branch.conf"), contents).unwrap();
	}

	#[test]
	fn test_bound_branch() {
		let dir = TempDir::new().unwrap();
		write_branch_conf(
			dir.path(),
			"parent_location = /elsewhere\nbound = True\nbound_location = /some/path\n",
		);
		let info = branch_info(dir.path());
		assert!(info.is_bound);
		assert_eq!(info.location, "/some/path");
	}

	#[test]
	fn test_unbound_branch_points_at_root() {
		let dir = TempDir::new().unwrap();
		write_branch_conf(dir.path(), "bound = False\n");
		let info = branch_info(dir.path());
		assert!(!info.is_bound);
		assert_eq!(info.location, dir.path().to_string_lossy());
	}

	#[test]
	fn test_missing_conf_is_standalone() {
		let dir = TempDir::new().unwrap();
		let info = branch_info(dir.path());
		assert!(!info.is_bound);
		assert_eq!(info.location, dir.path().to_string_lossy());
	}

	#[test]
	fn test_missing_keys_are_standalone() {
		let dir = TempDir::new().unwrap();
		write_branch_conf(dir.path(), "parent_location = /elsewhere\n");
		assert!(!branch_info(dir.path()).is_bound);
	}

	#[test]
	fn test_find_root_from_nested_dir() {
		let dir = TempDir::new().unwrap();
		let control = dir.path().join(BZR_DIR);
		fs::create_dir_all(&control).unwrap();
		fs::write(control.join(BRANCH_FORMAT_FILE), "Bazaar-NG meta directory, format 1\n").unwrap();

		let nested = dir.path().join("src").join("deep");
		fs::create_dir_all(&nested).unwrap();
		assert_eq!(find_repository_root(&nested), Some(dir.path().to_path_buf()));
	}

	#[test]
	fn test_find_root_from_file_uses_parent() {
		let dir = TempDir::new().unwrap();
		let control = dir.path().join(BZR_DIR);
		fs::create_dir_all(&control).unwrap();
		fs::write(control.join(BRANCH_FORMAT_FILE), "x").unwrap();

		let file = dir.path().join("main.c");
		fs::write(&file, "int main() {}\n").unwrap();
		assert_eq!(find_repository_root(&file), Some(dir.path().to_path_buf()));
	}

	#[test]
	fn test_find_root_from_missing_path_uses_parent() {
		let dir = TempDir::new().unwrap();
		let control = dir.path().join(BZR_DIR);
		fs::create_dir_all(&control).unwrap();
		fs::write(control.join(BRANCH_FORMAT_FILE), "x").unwrap();

		// A path to a deleted file is not treated as a directory level.
		let gone = dir.path().join("deleted.c");
		assert_eq!(find_repository_root(&gone), Some(dir.path().to_path_buf()));
	}

	#[test]
	fn test_find_root_without_marker() {
		let dir = TempDir::new().unwrap();
		assert_eq!(find_repository_root(dir.path()), None);
	}
}
