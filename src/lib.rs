pub mod build;
pub mod bzr;
pub mod commands;
pub mod output;
pub mod shell;
