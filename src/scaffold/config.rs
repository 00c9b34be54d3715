//! Configuration template copy.

use crate::assets;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::scaffold::lint_defaults::ensure_lint_defaults;
use crate::scaffold::sections::{strip_section, JS_SECTION};
use crate::scaffold::ScaffoldOutcome;
use crate::ui::UserInterface;

/// Write the bundled configuration template to the project root.
///
/// An existing target is skipped (with a warning) unless `overwrite` is set.
/// Without a package manifest the JS/TS hook section is excised before
/// writing; with one, missing ESLint/Prettier defaults are created as a side
/// effect.
pub fn write_config(
    layout: &ProjectLayout,
    overwrite: bool,
    ui: &mut dyn UserInterface,
) -> Result<ScaffoldOutcome> {
    let target = layout.config_file();

    if target.exists() && !overwrite {
        ui.warning(&format!(
            "'{}' already exists. Use --overwrite to replace it.",
            ProjectLayout::CONFIG_FILE
        ));
        ui.message("Skipping config file creation.");
        return Ok(ScaffoldOutcome::SkippedExisting);
    }

    let mut content = assets::template(assets::CONFIG_TEMPLATE)?.to_string();

    if !layout.has_package_manifest() {
        content = strip_section(&content, &JS_SECTION);
        ui.message(&format!(
            "No {} found, skipping JavaScript/TypeScript hooks.",
            ProjectLayout::PACKAGE_MANIFEST
        ));
    } else {
        ensure_lint_defaults(layout, ui)?;
    }

    let existed = target.exists();
    std::fs::write(&target, &content)?;
    tracing::debug!(path = %target.display(), bytes = content.len(), "wrote config file");

    let action = if existed { "Overwrote" } else { "Created" };
    ui.success(&format!(
        "{} '{}' from template.",
        action,
        ProjectLayout::CONFIG_FILE
    ));

    Ok(if existed {
        ScaffoldOutcome::Overwritten
    } else {
        ScaffoldOutcome::Created
    })
}
