//! Setup command implementation.
//!
//! The `hookstrap setup` command scaffolds the pre-commit configuration,
//! copies the guide document, installs the auxiliary commit tool, and asks
//! the hook manager to register each hook type.
//!
//! Failure policy (in order of the steps): a missing repository or missing
//! hook manager aborts immediately; a failed config write aborts only when no
//! config file exists afterward; everything else — guide copy, commitizen
//! install, individual hook types — degrades to warnings, with per-type hook
//! failures still forcing a non-zero exit at the end.

use std::path::Path;

use crate::cli::args::SetupArgs;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::manager::{HookManager, HOOK_TYPES};
use crate::probes::{self, config_file_exists, ProbeContext};
use crate::registry::ToolRegistry;
use crate::scaffold;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    layout: ProjectLayout,
    manager: HookManager,
    registry: ToolRegistry,
    args: SetupArgs,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(project_root: &Path, args: SetupArgs) -> Self {
        Self {
            layout: ProjectLayout::new(project_root),
            manager: HookManager::default(),
            registry: ToolRegistry::new(),
            args,
        }
    }

    /// Run the setup workflow with injected environment operations.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        ctx: &ProbeContext<'_>,
    ) -> Result<CommandResult> {
        ui.show_header("Git hooks setup");

        if !self.layout.is_repository() {
            ui.error("Not a git repository. Run 'git init' first.");
            return Ok(CommandResult::failure(1));
        }
        ui.success("Git repository detected.");

        let config_ok = match scaffold::write_config(&self.layout, self.args.overwrite, ui) {
            Ok(_) => true,
            Err(e) => {
                ui.error(&format!("Failed to copy config file: {}", e));
                false
            }
        };
        if !config_ok && !self.layout.config_file().exists() {
            ui.error("Failed to create config file. Aborting.");
            return Ok(CommandResult::failure(1));
        }

        if let Err(e) = scaffold::write_guide(&self.layout, self.args.overwrite, ui) {
            ui.warning(&format!("Failed to copy guide document: {}", e));
        }

        self.install_commit_tool(ui, ctx);

        let failed_types = match self.install_hooks(ui, ctx) {
            Some(failed) => failed,
            None => {
                ui.error(&format!(
                    "'{}' command not found. Install it ('{}') and ensure it is on PATH.",
                    self.manager.binary(),
                    self.manager.install_hint()
                ));
                return Ok(CommandResult::failure(1));
            }
        };

        self.print_tool_instructions(ui, ctx);

        if !failed_types.is_empty() {
            ui.error("Failed to install some hooks. Check the warnings above.");
            return Ok(CommandResult::failure(1));
        }

        ui.success("Setup complete. Hooks will run on the next commit.");
        ui.show_hint("Customize the hooks by editing .pre-commit-config.yaml,");
        ui.show_hint("then run `pre-commit install` to apply your changes.");

        Ok(CommandResult::success())
    }

    /// Best-effort install of the commit-message tool. Never aborts setup.
    fn install_commit_tool(&self, ui: &mut dyn UserInterface, ctx: &ProbeContext<'_>) {
        let Some(tool) = self.registry.get("commitizen") else {
            return;
        };
        if (ctx.command_exists)(tool.command) {
            return;
        }

        ui.message(&format!("Installing {}...", tool.name));
        let result = (ctx.run_command)(tool.install, self.layout.root());
        if result.success {
            ui.success(&format!("Installed {}.", tool.name));
        } else {
            ui.warning(&format!(
                "Failed to install {}: {}",
                tool.name,
                result.error_text()
            ));
        }
    }

    /// Install the script for every hook type.
    ///
    /// Returns `None` when the hook manager binary does not resolve at all,
    /// otherwise the list of hook types whose installation failed.
    fn install_hooks(
        &self,
        ui: &mut dyn UserInterface,
        ctx: &ProbeContext<'_>,
    ) -> Option<Vec<&'static str>> {
        ui.message("Installing pre-commit hooks...");

        if !(ctx.command_exists)(self.manager.binary()) {
            return None;
        }

        let mut failed = Vec::new();
        for hook_type in HOOK_TYPES {
            ui.message(&format!("  Installing {} hook...", hook_type));
            let command = self.manager.install_command(hook_type);
            let result = (ctx.run_command)(&command, self.layout.root());

            if ui.output_mode().shows_command_output() && !result.stdout.trim().is_empty() {
                ui.message(result.stdout.trim());
            }

            if result.success {
                tracing::debug!(hook_type, "hook installed");
            } else {
                ui.warning(&format!(
                    "Failed to install {} hook: {}",
                    hook_type,
                    result.error_text()
                ));
                failed.push(hook_type);
            }
        }

        Some(failed)
    }

    /// Print install instructions for every missing tool.
    fn print_tool_instructions(&self, ui: &mut dyn UserInterface, ctx: &ProbeContext<'_>) {
        ui.message("\nChecking for required tools and configurations...");

        let missing_py = missing_python_tools(&self.registry, ctx);
        if !missing_py.is_empty() {
            ui.message("\nPython tools:");
            for line in &missing_py {
                ui.message(line);
            }
            ui.show_hint("Add these to your project's dev dependencies (e.g. in pyproject.toml).");
        }

        if self.layout.has_package_manifest() {
            ui.message("\nJavaScript/TypeScript tools (package.json detected):");
            let missing_js = missing_js_tools(&self.layout, &self.registry, ctx);
            if missing_js.is_empty() {
                ui.success("Prettier and ESLint commands and config files are present.");
            } else {
                for line in &missing_js {
                    ui.message(line);
                }
                ui.show_hint("Install via npm/yarn and configure to taste.");
            }
        } else {
            ui.message("\nNo package.json detected, skipping JS/TS tool check.");
        }

        ui.show_hint("Verify the setup with `hookstrap check`.");
    }
}

/// Formatted lines for every Python-side tool missing from PATH.
pub(crate) fn missing_python_tools(registry: &ToolRegistry, ctx: &ProbeContext<'_>) -> Vec<String> {
    registry
        .python_tools()
        .iter()
        .filter(|tool| !(ctx.command_exists)(tool.command))
        .map(|tool| format!("  - {}: `{}`", tool.name, tool.install))
        .collect()
}

/// Formatted lines for missing JS/TS tools and their config files.
pub(crate) fn missing_js_tools(
    layout: &ProjectLayout,
    registry: &ToolRegistry,
    ctx: &ProbeContext<'_>,
) -> Vec<String> {
    let mut missing = Vec::new();

    for tool in registry.js_tools() {
        if !(ctx.command_exists)(tool.command) {
            missing.push(format!("  - {}: `{}`", tool.name, tool.install));
        }
    }

    if !config_file_exists(layout.root(), ProjectLayout::PRETTIER_CONFIG_GLOB) {
        missing.push(format!(
            "  - Prettier config: create a '{}' file (e.g. .prettierrc.json)",
            ProjectLayout::PRETTIER_CONFIG_GLOB
        ));
    }
    if !config_file_exists(layout.root(), ProjectLayout::ESLINT_CONFIG_GLOB) {
        missing.push(format!(
            "  - ESLint config: create an '{}' file (e.g. .eslintrc.json)",
            ProjectLayout::ESLINT_CONFIG_GLOB
        ));
    }

    missing
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &probes::default_context())
    }
}
