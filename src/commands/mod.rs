//! CLI entry points.

pub mod step;
pub mod vcs;
