//! Command-line interface module.
//!
//! The CLI plays the host: it owns the store file, reads page context files
//! and prints markup or admin HTML to stdout.

mod args;
pub mod common;
pub mod init;
pub mod meta;
pub mod render;
pub mod settings;
pub mod uninstall;

pub use args::{Cli, Commands};
