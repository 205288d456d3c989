//! Command-line interface components
//!
//! This module contains CLI-specific code for the SMAP Finder application:
//! argument parsing and command handlers.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, FindArgs, GlobalArgs, OutputFormat};
pub use commands::handle_find;
