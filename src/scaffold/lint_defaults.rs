//! Default lint-config creation for JS/TS projects.
//!
//! When a package manifest is present but no ESLint/Prettier configuration
//! matches the probe globs, minimal defaults are written so the scaffolded
//! hooks have something to run against. Existing configs are never touched.

use crate::assets;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::probes::config_file_exists;
use crate::ui::UserInterface;

/// File name the default ESLint configuration is written to.
pub const ESLINT_DEFAULT_FILE: &str = ".eslintrc.json";

/// File name the default Prettier configuration is written to.
///
/// Note the bare name: the `.prettierrc.*` probe glob does not match it.
pub const PRETTIER_DEFAULT_FILE: &str = ".prettierrc";

/// Create missing ESLint/Prettier defaults.
pub fn ensure_lint_defaults(layout: &ProjectLayout, ui: &mut dyn UserInterface) -> Result<()> {
    if !config_file_exists(layout.root(), ProjectLayout::ESLINT_CONFIG_GLOB) {
        let content = assets::template(assets::ESLINT_TEMPLATE)?;
        std::fs::write(layout.root().join(ESLINT_DEFAULT_FILE), content)?;
        ui.success(&format!(
            "Created basic {} configuration.",
            ESLINT_DEFAULT_FILE
        ));
    }

    if !config_file_exists(layout.root(), ProjectLayout::PRETTIER_CONFIG_GLOB) {
        let content = assets::template(assets::PRETTIER_TEMPLATE)?;
        std::fs::write(layout.root().join(PRETTIER_DEFAULT_FILE), content)?;
        ui.success(&format!(
            "Created basic {} configuration.",
            PRETTIER_DEFAULT_FILE
        ));
    }

    Ok(())
}
