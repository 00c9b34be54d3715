//! Hook script installation probe.
//!
//! Whether a hook type is "installed" is inferred from the content of the
//! script the hook manager writes under `.git/hooks/`. The marker strings
//! are data on the probe, not hardcoded in the check, so a change in the
//! manager's generated wording only touches [`HookScriptProbe::DEFAULT_MARKERS`].

use std::path::Path;

/// Marker substrings identifying a script as written by the hook manager.
///
/// All markers must be present for the script to count as installed.
#[derive(Debug, Clone)]
pub struct HookScriptProbe {
    markers: Vec<String>,
}

impl HookScriptProbe {
    /// Markers pre-commit writes into every generated hook script.
    pub const DEFAULT_MARKERS: [&'static str; 3] = [
        "pre-commit",
        "File generated by pre-commit:",
        "INSTALL_PYTHON",
    ];

    /// Create a probe with custom marker substrings.
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    /// True iff the hook script exists, reads as text, and contains every
    /// marker. Any read failure (missing file, binary content, permission
    /// error) is false, never an error.
    pub fn is_installed(&self, hooks_dir: &Path, hook_type: &str) -> bool {
        let script = hooks_dir.join(hook_type);
        if !script.is_file() {
            return false;
        }

        match std::fs::read_to_string(&script) {
            Ok(content) => self.markers.iter().all(|m| content.contains(m.as_str())),
            Err(_) => false,
        }
    }
}

impl Default for HookScriptProbe {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect())
    }
}
