//! VCS subcommands: thin wrappers that resolve the repository root, run one
//! client operation, and print the result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::bzr::BzrClient;
use crate::bzr::args::{CommitOption, ExtraOption, PullOption, PushOption};
use crate::bzr::diff::{DiffController, DiffFormatFlags, DiffParameters};
use crate::output;

/// Locate the repository root at or above `dir` (default: current dir).
fn repository_root(client: &BzrClient, dir: Option<&Path>) -> Result<PathBuf> {
	let start = dir.unwrap_or_else(|| Path::new("."));
	let start = dunce::canonicalize(start)
		.with_context(|| format!("failed to canonicalize {}", start.display()))?;
	client.find_repository_root(&start).ok_or_else(|| {
		anyhow::anyhow!("no bzr repository found at or above {}", start.display())
	})
}

pub fn status(client: &BzrClient, dir: Option<&Path>, file: &str) -> Result<()> {
	let root = repository_root(client, dir)?;
	let entries = client.status(&root, file)?;
	if entries.is_empty() {
		output::note("working tree is clean");
		return Ok(());
	}
	for entry in entries {
		let tag = entry.state.map(|state| state.to_string()).unwrap_or_default();
		output::entry(&tag, &entry.path);
	}
	Ok(())
}

pub fn diff(
	client: &BzrClient,
	dir: Option<&Path>,
	files: Vec<String>,
	revision: &str,
	flags: DiffFormatFlags,
) -> Result<()> {
	let root = repository_root(client, dir)?;
	let mut extras = Vec::new();
	if !revision.is_empty() {
		extras.push(ExtraOption::Many(vec!["-r".to_owned(), revision.to_owned()]));
	}
	let controller = DiffController::new(DiffParameters {
		working_dir: root,
		files,
		extras,
	});
	let text = client.diff(&controller.effective_parameters(flags))?;
	print!("{text}");
	Ok(())
}

pub fn log(client: &BzrClient, dir: Option<&Path>, files: Vec<String>, revision: &str) -> Result<()> {
	let root = repository_root(client, dir)?;
	let mut extras = Vec::new();
	if !revision.is_empty() {
		extras.push(ExtraOption::Many(vec!["-r".to_owned(), revision.to_owned()]));
	}
	let limit = client.settings().log_count;
	if limit > 0 {
		extras.push(ExtraOption::Many(vec!["--limit".to_owned(), limit.to_string()]));
	}
	println!("{}", client.log(&root, &files, &extras)?);
	Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn pull(
	client: &BzrClient,
	dir: Option<&Path>,
	location: &str,
	revision: &str,
	remember: bool,
	overwrite: bool,
	local: bool,
) -> Result<()> {
	let root = repository_root(client, dir)?;
	let options = [
		PullOption::Remember(remember),
		PullOption::Overwrite(overwrite),
		PullOption::Revision(revision.to_owned()),
		PullOption::Local(local),
	];
	client.pull(&root, location, &options)?;
	output::success("pull finished");
	Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn push(
	client: &BzrClient,
	dir: Option<&Path>,
	location: &str,
	revision: &str,
	remember: bool,
	overwrite: bool,
	use_existing_dir: bool,
	create_prefix: bool,
) -> Result<()> {
	let root = repository_root(client, dir)?;
	let options = [
		PushOption::Remember(remember),
		PushOption::Overwrite(overwrite),
		PushOption::Revision(revision.to_owned()),
		PushOption::UseExistingDir(use_existing_dir),
		PushOption::CreatePrefix(create_prefix),
	];
	client.push(&root, location, &options)?;
	output::success("push finished");
	Ok(())
}

pub fn commit(
	client: &BzrClient,
	dir: Option<&Path>,
	files: Vec<String>,
	message_file: &Path,
	author: &str,
	fixes: Vec<String>,
	local: bool,
) -> Result<()> {
	let root = repository_root(client, dir)?;
	let options = [
		CommitOption::Author(author.to_owned()),
		CommitOption::Fixes(fixes),
		CommitOption::Local(local),
	];
	client.commit(&root, &files, &message_file.to_string_lossy(), &options)?;
	output::success("commit recorded");
	Ok(())
}

pub fn update(client: &BzrClient, dir: Option<&Path>, revision: &str) -> Result<()> {
	let root = repository_root(client, dir)?;
	client.update(&root, revision)?;
	output::success("working tree updated");
	Ok(())
}

pub fn revert(client: &BzrClient, dir: Option<&Path>, file: &str, revision: &str) -> Result<()> {
	let root = repository_root(client, dir)?;
	if file.is_empty() {
		client.revert_all(&root, revision)?;
	} else {
		client.revert(&root, file, revision)?;
	}
	output::success("reverted");
	Ok(())
}

pub fn annotate(client: &BzrClient, dir: Option<&Path>, file: &str, revision: &str) -> Result<()> {
	let root = repository_root(client, dir)?;
	println!("{}", client.annotate(&root, file, revision)?);
	Ok(())
}

pub fn view(client: &BzrClient, dir: Option<&Path>, revision: &str) -> Result<()> {
	let root = repository_root(client, dir)?;
	println!("{}", client.view(&root, revision)?);
	Ok(())
}

pub fn branch_info(client: &BzrClient, dir: Option<&Path>) -> Result<()> {
	let root = repository_root(client, dir)?;
	let info = client.branch_info(&root);
	output::label_value("Branch", root.display());
	output::label_value("Bound", info.is_bound);
	output::label_value("Location", &info.location);
	Ok(())
}

pub fn root(client: &BzrClient, dir: Option<&Path>) -> Result<()> {
	let root = repository_root(client, dir)?;
	println!("{}", root.display());
	Ok(())
}

pub fn whoami(client: &BzrClient, dir: Option<&Path>, set: bool) -> Result<()> {
	let root = repository_root(client, dir)?;
	if set {
		if client.set_user_id(&root)? {
			output::success(&format!("identity set to {}", client.settings().user_id()));
		} else {
			output::warn("bzr rejected the identity");
		}
		return Ok(());
	}
	println!("{}", client.user_id(&root)?);
	Ok(())
}
