//! Bundled templates embedded at compile time.

use crate::error::{HookstrapError, Result};
use include_dir::{include_dir, Dir};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Name of the bundled pre-commit configuration template.
pub const CONFIG_TEMPLATE: &str = "pre-commit-config.yaml";

/// Name of the bundled guide document.
pub const GUIDE_TEMPLATE: &str = "GIT_HOOKS_GUIDE.md";

/// Name of the bundled default ESLint configuration.
pub const ESLINT_TEMPLATE: &str = "eslintrc.json";

/// Name of the bundled default Prettier configuration.
pub const PRETTIER_TEMPLATE: &str = "prettierrc";

/// Load a bundled template by name.
pub fn template(name: &str) -> Result<&'static str> {
    let file = TEMPLATES_DIR
        .get_file(name)
        .ok_or_else(|| HookstrapError::TemplateMissing {
            name: name.to_string(),
        })?;

    file.contents_utf8()
        .ok_or_else(|| HookstrapError::TemplateInvalid {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::sections::JS_SECTION;

    #[test]
    fn all_templates_are_bundled() {
        for name in [
            CONFIG_TEMPLATE,
            GUIDE_TEMPLATE,
            ESLINT_TEMPLATE,
            PRETTIER_TEMPLATE,
        ] {
            assert!(template(name).is_ok(), "template {:?} missing", name);
        }
    }

    #[test]
    fn unknown_template_errors() {
        let err = template("nope.yaml").unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn config_template_carries_both_section_markers() {
        let content = template(CONFIG_TEMPLATE).unwrap();
        assert!(content.contains(JS_SECTION.start));
        assert!(content.contains(JS_SECTION.resume));
    }

    #[test]
    fn config_template_parses_as_yaml() {
        let content = template(CONFIG_TEMPLATE).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(content).unwrap();
        assert!(parsed.get("repos").is_some());
    }

    #[test]
    fn eslint_template_has_four_rules() {
        let content = template(ESLINT_TEMPLATE).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(content).unwrap();
        let rules = parsed["rules"].as_object().unwrap();
        assert_eq!(rules.len(), 4);
        for rule in ["indent", "linebreak-style", "quotes", "semi"] {
            assert!(rules.contains_key(rule), "rule {:?} missing", rule);
        }
    }

    #[test]
    fn prettier_template_parses_as_json() {
        let content = template(PRETTIER_TEMPLATE).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(content).unwrap();
        assert_eq!(parsed["tabWidth"], 2);
    }
}
