//! Tool registry and definitions.
//!
//! Defines the lint/format tools this setup expects, how to check for them,
//! and how to install them. The registry is static data built once at
//! startup and passed into the setup/check workflows.

/// A development tool the scaffolded hooks depend on.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    /// Tool name as shown to the user (e.g., "commitizen").
    pub name: &'static str,
    /// Binary checked on PATH (may differ from the name, e.g., "cz").
    pub command: &'static str,
    /// Human-readable install instruction.
    pub install: &'static str,
    /// Packages the instruction installs.
    pub packages: &'static [&'static str],
}

/// The Python-side toolchain.
const PYTHON_TOOLS: [Tool; 4] = [
    Tool {
        name: "black",
        command: "black",
        install: "pip install black",
        packages: &["black"],
    },
    Tool {
        name: "flake8",
        command: "flake8",
        install: "pip install flake8",
        packages: &["flake8"],
    },
    Tool {
        name: "isort",
        command: "isort",
        install: "pip install isort",
        packages: &["isort"],
    },
    Tool {
        name: "commitizen",
        command: "cz",
        install: "pip install commitizen",
        packages: &["commitizen"],
    },
];

/// The JS/TS-side toolchain, checked only when a package manifest is present.
const JS_TOOLS: [Tool; 2] = [
    Tool {
        name: "prettier",
        command: "prettier",
        install: "npm install -g prettier",
        packages: &["prettier"],
    },
    Tool {
        name: "eslint",
        command: "eslint",
        install: "npm install -g eslint @typescript-eslint/parser @typescript-eslint/eslint-plugin",
        packages: &[
            "eslint",
            "@typescript-eslint/parser",
            "@typescript-eslint/eslint-plugin",
        ],
    },
];

/// Registry of the tools the scaffolded configuration relies on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create the built-in registry.
    pub fn new() -> Self {
        Self
    }

    /// Python-side tools, always checked.
    pub fn python_tools(&self) -> &'static [Tool] {
        &PYTHON_TOOLS
    }

    /// JS/TS-side tools, checked when a package manifest is present.
    pub fn js_tools(&self) -> &'static [Tool] {
        &JS_TOOLS
    }

    /// Look up a tool by name across both toolchains.
    pub fn get(&self, name: &str) -> Option<&'static Tool> {
        PYTHON_TOOLS
            .iter()
            .chain(JS_TOOLS.iter())
            .find(|t| t.name == name)
    }
}
