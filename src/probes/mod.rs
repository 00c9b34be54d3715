//! Environment probes: read-only predicates about the surrounding system.
//!
//! Each probe answers a yes/no question — does a command resolve, does a
//! config file matching a pattern exist, does a hook script look installed.
//! Probes never error; any failure to read the environment is the negative
//! answer.
//!
//! [`ProbeContext`] bundles the two operations that touch the outside world
//! (command resolution and command execution) behind injectable closures so
//! the setup/check workflows can be exercised in tests without a real PATH.

pub mod command;
pub mod config_files;
pub mod hooks;

pub use command::{command_exists, extract_version};
pub use config_files::config_file_exists;
pub use hooks::HookScriptProbe;

use crate::shell::{self, CommandOutput};
use std::path::Path;

/// Injectable environment operations for the setup and check workflows.
pub struct ProbeContext<'a> {
    /// Resolve a command name on PATH, returning true if found.
    pub command_exists: &'a dyn Fn(&str) -> bool,

    /// Run a shell command in a working directory, capturing output.
    pub run_command: &'a dyn Fn(&str, &Path) -> CommandOutput,
}

/// Build the default `ProbeContext` for production use.
pub fn default_context() -> ProbeContext<'static> {
    ProbeContext {
        command_exists: &|name| command::command_exists(name),
        run_command: &|cmd, cwd| shell::execute_quiet(cmd, Some(cwd)),
    }
}
