//! Command resolution probe.

use std::process::{Command, Stdio};

/// Check if a command exists in the system's PATH.
///
/// Invokes the platform's resolution utility (`which` on Unix, `where` on
/// Windows) and requires both a zero exit code and non-empty output. Shell
/// builtins and aliases are deliberately not recognized: a hook or install
/// step can only use what a fresh subprocess can resolve.
pub fn command_exists(name: &str) -> bool {
    let resolver = if cfg!(target_os = "windows") {
        "where"
    } else {
        "which"
    };

    Command::new(resolver)
        .arg(name)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .map(|out| out.status.success() && !String::from_utf8_lossy(&out.stdout).trim().is_empty())
        .unwrap_or(false)
}

/// Extract a version number from command output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
