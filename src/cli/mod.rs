//! Command-line interface module.

mod args;
pub mod check;
pub mod export;
pub mod init;
pub mod render;

pub use args::{CheckArgs, Cli, Commands, ExportArgs};
