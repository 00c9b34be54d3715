//! Command-line interface for hookstrap.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, SetupArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
