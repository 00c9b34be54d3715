//! The external hook manager as an opaque collaborator.
//!
//! This tool never executes hooks itself; it asks the manager to install
//! per-type scripts and inspects what the manager wrote. Only the binary
//! name, the recognized hook types, and the command lines live here —
//! execution goes through the caller's [`ProbeContext`](crate::probes::ProbeContext).

/// Git lifecycle points the hook manager installs scripts for.
pub const HOOK_TYPES: [&str; 3] = ["pre-commit", "commit-msg", "pre-push"];

/// Handle to the external hook manager binary.
#[derive(Debug, Clone)]
pub struct HookManager {
    binary: String,
}

impl HookManager {
    /// Create a handle for a specific binary name.
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }

    /// The manager's binary name.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Command line installing the script for one hook type.
    pub fn install_command(&self, hook_type: &str) -> String {
        format!("{} install --hook-type {}", self.binary, hook_type)
    }

    /// Command line reporting the manager's version.
    pub fn version_command(&self) -> String {
        format!("{} --version", self.binary)
    }

    /// How to install the manager when it is missing.
    pub fn install_hint(&self) -> String {
        format!("pip install {}", self.binary)
    }
}

impl Default for HookManager {
    fn default() -> Self {
        Self::new("pre-commit")
    }
}
