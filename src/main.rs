use std::path::PathBuf;

use bzr_bridge::bzr::diff::DiffFormatFlags;
use bzr_bridge::bzr::{BzrClient, settings::BzrSettings};
use bzr_bridge::commands::{step, vcs};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
	name = "bzr-bridge",
	about = "Bazaar command-line plumbing and make build-step wiring for build pipelines",
	version
)]
struct Cli {
	/// Path to a JSON settings file (binary path, identity, log limit).
	#[arg(long, global = true)]
	settings: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show the short working-tree status, classified per file.
	Status {
		/// Limit the report to one file or directory.
		#[arg(default_value = "")]
		file: String,
		/// Repository directory (defaults to current working directory).
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Show changes in the working tree.
	Diff {
		files: Vec<String>,
		/// Revision or revision range, e.g. `-r 1..4`.
		#[arg(long, short = 'r', default_value = "")]
		revision: String,
		/// Ignore whitespace when comparing lines.
		#[arg(long, short = 'w')]
		ignore_whitespace: bool,
		/// Ignore changes whose lines are all blank.
		#[arg(long, short = 'B')]
		ignore_blank_lines: bool,
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Show the revision log.
	Log {
		files: Vec<String>,
		#[arg(long, short = 'r', default_value = "")]
		revision: String,
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Pull from a remote location into this branch.
	Pull {
		#[arg(default_value = "")]
		location: String,
		#[arg(long, short = 'r', default_value = "")]
		revision: String,
		/// Remember the location as the default.
		#[arg(long)]
		remember: bool,
		/// Overwrite diverged history.
		#[arg(long)]
		overwrite: bool,
		/// Perform a local pull in a bound branch.
		#[arg(long)]
		local: bool,
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Push this branch to a remote location.
	Push {
		#[arg(default_value = "")]
		location: String,
		#[arg(long, short = 'r', default_value = "")]
		revision: String,
		#[arg(long)]
		remember: bool,
		#[arg(long)]
		overwrite: bool,
		/// Push into an existing, non-branch directory.
		#[arg(long)]
		use_existing_dir: bool,
		/// Create leading directories at the destination.
		#[arg(long)]
		create_prefix: bool,
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Commit changes, reading the message from a file.
	Commit {
		files: Vec<String>,
		/// File containing the commit message.
		#[arg(long, short = 'F')]
		message_file: PathBuf,
		/// Record a different author than the committer.
		#[arg(long, default_value = "")]
		author: String,
		/// Bug references fixed by this commit (repeatable).
		#[arg(long)]
		fixes: Vec<String>,
		/// Commit locally in a bound branch.
		#[arg(long)]
		local: bool,
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Update the working tree to a revision (default: branch tip).
	Update {
		#[arg(long, short = 'r', default_value = "")]
		revision: String,
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Revert a file, or the whole tree, to a revision.
	Revert {
		#[arg(default_value = "")]
		file: String,
		#[arg(long, short = 'r', default_value = "")]
		revision: String,
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Show the origin of each line of a file.
	Annotate {
		file: String,
		#[arg(long, short = 'r', default_value = "")]
		revision: String,
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Show one revision with its diff.
	View {
		revision: String,
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Report whether the branch is bound and where it points.
	BranchInfo {
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Print the repository root for a path.
	Root {
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Show or set the identity bzr uses for commits.
	Whoami {
		/// Set the identity from the settings file instead of showing it.
		#[arg(long)]
		set: bool,
		#[arg(long)]
		repo: Option<PathBuf>,
	},
	/// Inspect a persisted make step record.
	Step {
		/// JSON file holding the step record.
		record: PathBuf,
		/// Targets the surrounding project offers (repeatable).
		#[arg(long = "target")]
		targets: Vec<String>,
		/// Simulate this command as the toolchain default and show the
		/// resulting summary.
		#[arg(long)]
		make: Option<String>,
	},
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	let client = BzrClient::new(BzrSettings::load(cli.settings.as_deref())?);

	match cli.command {
		Command::Status { file, repo } => vcs::status(&client, repo.as_deref(), &file),
		Command::Diff {
			files,
			revision,
			ignore_whitespace,
			ignore_blank_lines,
			repo,
		} => vcs::diff(
			&client,
			repo.as_deref(),
			files,
			&revision,
			DiffFormatFlags {
				ignore_whitespace,
				ignore_blank_lines,
			},
		),
		Command::Log { files, revision, repo } => vcs::log(&client, repo.as_deref(), files, &revision),
		Command::Pull {
			location,
			revision,
			remember,
			overwrite,
			local,
			repo,
		} => vcs::pull(
			&client,
			repo.as_deref(),
			&location,
			&revision,
			remember,
			overwrite,
			local,
		),
		Command::Push {
			location,
			revision,
			remember,
			overwrite,
			use_existing_dir,
			create_prefix,
			repo,
		} => vcs::push(
			&client,
			repo.as_deref(),
			&location,
			&revision,
			remember,
			overwrite,
			use_existing_dir,
			create_prefix,
		),
		Command::Commit {
			files,
			message_file,
			author,
			fixes,
			local,
			repo,
		} => vcs::commit(
			&client,
			repo.as_deref(),
			files,
			&message_file,
			&author,
			fixes,
			local,
		),
		Command::Update { revision, repo } => vcs::update(&client, repo.as_deref(), &revision),
		Command::Revert { file, revision, repo } => {
			vcs::revert(&client, repo.as_deref(), &file, &revision)
		}
		Command::Annotate { file, revision, repo } => {
			vcs::annotate(&client, repo.as_deref(), &file, &revision)
		}
		Command::View { revision, repo } => vcs::view(&client, repo.as_deref(), &revision),
		Command::BranchInfo { repo } => vcs::branch_info(&client, repo.as_deref()),
		Command::Root { repo } => vcs::root(&client, repo.as_deref()),
		Command::Whoami { set, repo } => vcs::whoami(&client, repo.as_deref(), set),
		Command::Step { record, targets, make } => step::run(&record, targets, make.as_deref()),
	}
}
