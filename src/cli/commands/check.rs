//! Check command implementation.
//!
//! The `hookstrap check` command runs a fixed sequence of read-only probes
//! and prints a classified report. Classification: a missing repository,
//! missing hook manager, or missing config file is an error; a missing
//! individual tool, hook type, config file, or the guide document is a
//! warning. The command exits zero regardless of findings unless `--strict`
//! is passed.

use std::path::Path;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::manager::{HookManager, HOOK_TYPES};
use crate::probes::{self, extract_version, HookScriptProbe, ProbeContext};
use crate::registry::ToolRegistry;
use crate::report::{CheckReport, Severity};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::setup::missing_js_tools;

/// The check command implementation.
pub struct CheckCommand {
    layout: ProjectLayout,
    manager: HookManager,
    registry: ToolRegistry,
    hook_probe: HookScriptProbe,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            layout: ProjectLayout::new(project_root),
            manager: HookManager::default(),
            registry: ToolRegistry::new(),
            hook_probe: HookScriptProbe::default(),
            args,
        }
    }

    /// Run the check workflow with injected environment operations.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        ctx: &ProbeContext<'_>,
    ) -> Result<CommandResult> {
        if !self.args.json {
            ui.show_header("Git hooks status");
        }

        let report = self.run_probes(ctx);

        if self.args.json {
            let payload = serde_json::json!({
                "status": report.overall(),
                "successes": report.successes(),
                "warnings": report.warnings(),
                "errors": report.errors(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            self.print_report(&report, ui);
        }

        // Findings are conveyed through text and color; the exit code stays
        // zero unless --strict opts in to error-driven failure.
        if self.args.strict && report.overall() == Severity::Error {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }

    /// Run every probe in order and collect the findings.
    pub fn run_probes(&self, ctx: &ProbeContext<'_>) -> CheckReport {
        let mut report = CheckReport::new();

        report.merge(self.check_repository());
        report.merge(self.check_hook_manager(ctx));
        report.merge(self.check_hooks());
        report.merge(self.check_tools(ctx));

        report
    }

    /// Repository probe: missing version-control metadata is a hard error.
    fn check_repository(&self) -> CheckReport {
        let mut report = CheckReport::new();

        if self.layout.is_repository() {
            report.success("Git repository detected.");
        } else {
            report.error("Not a git repository.");
        }

        report
    }

    /// Hook manager availability and config presence.
    fn check_hook_manager(&self, ctx: &ProbeContext<'_>) -> CheckReport {
        let mut report = CheckReport::new();

        if (ctx.command_exists)(self.manager.binary()) {
            let output = (ctx.run_command)(&self.manager.version_command(), self.layout.root());
            match extract_version(&output.stdout) {
                Some(version) => report.success(format!(
                    "'{}' command found ({}).",
                    self.manager.binary(),
                    version
                )),
                None => report.success(format!("'{}' command found.", self.manager.binary())),
            }
        } else {
            report.error(format!(
                "'{}' command not found. Install it: {}",
                self.manager.binary(),
                self.manager.install_hint()
            ));
        }

        let config = self.layout.config_file();
        if config.exists() {
            report.success(format!("'{}' found.", ProjectLayout::CONFIG_FILE));

            match std::fs::read_to_string(&config) {
                Ok(content) => {
                    if serde_yaml::from_str::<serde_yaml::Value>(&content).is_err() {
                        report.warning(format!(
                            "'{}' is not valid YAML; hooks will fail to run.",
                            ProjectLayout::CONFIG_FILE
                        ));
                    }
                }
                Err(e) => {
                    report.warning(format!(
                        "'{}' could not be read: {}.",
                        ProjectLayout::CONFIG_FILE,
                        e
                    ));
                }
            }
        } else {
            report.error(format!(
                "'{}' not found. Run `hookstrap setup` first.",
                ProjectLayout::CONFIG_FILE
            ));
        }

        if self.layout.guide_file().exists() {
            report.success(format!("'{}' found.", ProjectLayout::GUIDE_FILE));
        } else {
            report.warning(format!(
                "'{}' not found. Run `hookstrap setup` to restore it.",
                ProjectLayout::GUIDE_FILE
            ));
        }

        report
    }

    /// Per-hook-type installation probe.
    fn check_hooks(&self) -> CheckReport {
        let mut report = CheckReport::new();
        let hooks_dir = self.layout.hooks_dir();
        let mut all_installed = true;

        for hook_type in HOOK_TYPES {
            if self.hook_probe.is_installed(&hooks_dir, hook_type) {
                report.success(format!("{} hook script found in .git/hooks/.", hook_type));
            } else {
                report.warning(format!(
                    "{} hook script not found or not managed by {} in .git/hooks/. \
                     Try `{}`.",
                    hook_type,
                    self.manager.binary(),
                    self.manager.install_command(hook_type)
                ));
                all_installed = false;
            }
        }

        if all_installed {
            report.success("All expected hook types are installed.");
        }

        report
    }

    /// Per-tool availability probe.
    fn check_tools(&self, ctx: &ProbeContext<'_>) -> CheckReport {
        let mut report = CheckReport::new();

        for tool in self.registry.python_tools() {
            if (ctx.command_exists)(tool.command) {
                report.success(format!("{} command found.", tool.name));
            } else {
                report.warning(format!(
                    "{} command not found. Install: `{}`",
                    tool.name, tool.install
                ));
            }
        }

        if self.layout.has_package_manifest() {
            for line in missing_js_tools(&self.layout, &self.registry, ctx) {
                report.warning(line.trim_start().to_string());
            }
        }

        report
    }

    /// Print the classified report followed by a one-line verdict.
    fn print_report(&self, report: &CheckReport, ui: &mut dyn UserInterface) {
        for msg in report.successes() {
            ui.success(msg);
        }
        for msg in report.warnings() {
            ui.warning(msg);
        }
        for msg in report.errors() {
            ui.error(msg);
        }

        match report.overall() {
            Severity::Success => ui.success("Setup looks good. Hooks should run."),
            Severity::Warning => {
                ui.warning("Setup seems okay, but some tools or configs are missing.");
                ui.show_hint("Review the warnings above and install/configure as needed.");
            }
            Severity::Error => ui.error("Issues found with the setup. Fix the errors listed above."),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &probes::default_context())
    }
}
