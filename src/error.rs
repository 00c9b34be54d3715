//! Error types for hookstrap operations.
//!
//! This module defines [`HookstrapError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `HookstrapError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `HookstrapError::Other`) for unexpected errors
//! - Subprocess and file failures inside the setup/check workflows are caught
//!   at the call site and reported through the UI; they do not unwind past the
//!   command that triggered them

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hookstrap operations.
#[derive(Debug, Error)]
pub enum HookstrapError {
    /// The working directory is not a git repository.
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    /// The external hook manager binary cannot be resolved at all.
    #[error("Hook manager '{binary}' not found on PATH. Install it: {hint}")]
    HookManagerMissing { binary: String, hint: String },

    /// A bundled template is missing from the embedded assets.
    #[error("Bundled template not found: {name}")]
    TemplateMissing { name: String },

    /// A bundled template is not valid UTF-8.
    #[error("Bundled template is not valid UTF-8: {name}")]
    TemplateInvalid { name: String },

    /// Writing a scaffolded artifact failed.
    #[error("Failed to write {path}: {message}")]
    ScaffoldFailed { path: PathBuf, message: String },

    /// Shell command failed to spawn or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for hookstrap operations.
pub type Result<T> = std::result::Result<T, HookstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_repository_displays_path() {
        let err = HookstrapError::NotARepository {
            path: PathBuf::from("/work/project"),
        };
        assert!(err.to_string().contains("/work/project"));
    }

    #[test]
    fn hook_manager_missing_displays_binary_and_hint() {
        let err = HookstrapError::HookManagerMissing {
            binary: "pre-commit".into(),
            hint: "pip install pre-commit".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pre-commit"));
        assert!(msg.contains("pip install pre-commit"));
    }

    #[test]
    fn template_missing_displays_name() {
        let err = HookstrapError::TemplateMissing {
            name: "pre-commit-config.yaml".into(),
        };
        assert!(err.to_string().contains("pre-commit-config.yaml"));
    }

    #[test]
    fn scaffold_failed_displays_path_and_message() {
        let err = HookstrapError::ScaffoldFailed {
            path: PathBuf::from(".pre-commit-config.yaml"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(".pre-commit-config.yaml"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = HookstrapError::CommandFailed {
            command: "pre-commit install".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("pre-commit install"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HookstrapError = io_err.into();
        assert!(matches!(err, HookstrapError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(HookstrapError::TemplateMissing {
                name: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
