//! Bazaar operations for bzr-bridge.
//!
//! This module translates logical VCS operations into argument lists for the
//! `bzr` command-line tool and parses its textual output:
//! - per-operation argument builders with closed option vocabularies
//! - short-status line parsing
//! - branch.conf inspection and repository root discovery
//! - diff re-run coordination for open diff views

pub mod args;
pub mod branch;
pub mod client;
pub mod cmd;
pub mod diff;
pub mod settings;
pub mod status;

// Re-export commonly used items
pub use client::BzrClient;
pub use cmd::bzr;
