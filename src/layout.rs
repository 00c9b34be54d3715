//! Project layout: the fixed artifact names this tool reads and writes.
//!
//! All paths are derived from a single project root chosen at startup
//! (current directory or `--project`). Probes and commands receive a
//! [`ProjectLayout`] explicitly instead of consulting globals, so tests can
//! point the whole tool at a temp directory.

use std::path::{Path, PathBuf};

/// Immutable view of a project's hook-related files.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Target configuration file, written from the bundled template.
    pub const CONFIG_FILE: &'static str = ".pre-commit-config.yaml";

    /// Guide document copied alongside the configuration file.
    pub const GUIDE_FILE: &'static str = "GIT_HOOKS_GUIDE.md";

    /// Version-control metadata directory marking a git repository.
    pub const GIT_DIR: &'static str = ".git";

    /// Manifest whose presence signals a JS/TS project.
    pub const PACKAGE_MANIFEST: &'static str = "package.json";

    /// Glob for ESLint configuration files.
    pub const ESLINT_CONFIG_GLOB: &'static str = ".eslintrc.*";

    /// Glob for Prettier configuration files.
    pub const PRETTIER_CONFIG_GLOB: &'static str = ".prettierrc.*";

    /// Create a layout rooted at the given directory.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the target configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.root.join(Self::CONFIG_FILE)
    }

    /// Path to the guide document.
    pub fn guide_file(&self) -> PathBuf {
        self.root.join(Self::GUIDE_FILE)
    }

    /// Path to the version-control metadata directory.
    pub fn git_dir(&self) -> PathBuf {
        self.root.join(Self::GIT_DIR)
    }

    /// Directory holding the installed hook scripts.
    pub fn hooks_dir(&self) -> PathBuf {
        self.git_dir().join("hooks")
    }

    /// Path to the JS/TS package manifest.
    pub fn package_manifest(&self) -> PathBuf {
        self.root.join(Self::PACKAGE_MANIFEST)
    }

    /// True iff the version-control metadata directory exists.
    pub fn is_repository(&self) -> bool {
        self.git_dir().is_dir()
    }

    /// True iff the JS/TS package manifest exists.
    pub fn has_package_manifest(&self) -> bool {
        self.package_manifest().exists()
    }
}
