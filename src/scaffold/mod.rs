//! Setup-side file writers: configuration template, guide document, and
//! default lint configs.
//!
//! All writers follow the same exists/overwrite rule: an existing target is
//! skipped with a warning unless overwrite was requested, and writes are
//! whole-file replacements.

pub mod config;
pub mod lint_defaults;
pub mod sections;

pub use config::write_config;

use crate::assets;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::ui::UserInterface;

/// What a scaffold writer did with its target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// Target did not exist and was written.
    Created,
    /// Target existed and was replaced (overwrite requested).
    Overwritten,
    /// Target existed and was left alone.
    SkippedExisting,
}

/// Copy the bundled guide document next to the configuration file.
pub fn write_guide(
    layout: &ProjectLayout,
    overwrite: bool,
    ui: &mut dyn UserInterface,
) -> Result<ScaffoldOutcome> {
    let target = layout.guide_file();

    if target.exists() && !overwrite {
        ui.warning(&format!(
            "'{}' already exists. Use --overwrite to replace it.",
            ProjectLayout::GUIDE_FILE
        ));
        return Ok(ScaffoldOutcome::SkippedExisting);
    }

    let existed = target.exists();
    let content = assets::template(assets::GUIDE_TEMPLATE)?;
    std::fs::write(&target, content)?;
    tracing::debug!(path = %target.display(), "wrote guide document");

    if existed {
        ui.success(&format!("Overwrote '{}'.", ProjectLayout::GUIDE_FILE));
        Ok(ScaffoldOutcome::Overwritten)
    } else {
        ui.success(&format!("Created '{}'.", ProjectLayout::GUIDE_FILE));
        Ok(ScaffoldOutcome::Created)
    }
}
