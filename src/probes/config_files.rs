//! Config file glob probe.
//!
//! The patterns this tool needs are single-`*` file name globs
//! (`.eslintrc.*`, `.prettierrc.*`), so matching is a prefix/suffix split
//! rather than a full glob engine.

use std::path::Path;

/// Check if any entry in the directory matches the glob pattern.
pub fn config_file_exists(root: &Path, pattern: &str) -> bool {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return false,
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        if let Some(name) = name.to_str() {
            if matches_pattern(name, pattern) {
                return true;
            }
        }
    }

    false
}

/// Match a file name against a pattern containing at most one `*`.
fn matches_pattern(name: &str, pattern: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
        }
        None => name == pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn matches_wildcard_suffix() {
        assert!(matches_pattern(".eslintrc.json", ".eslintrc.*"));
        assert!(matches_pattern(".eslintrc.js", ".eslintrc.*"));
        assert!(!matches_pattern(".eslintrc", ".eslintrc.*"));
        assert!(!matches_pattern("eslintrc.json", ".eslintrc.*"));
    }

    #[test]
    fn matches_exact_without_wildcard() {
        assert!(matches_pattern(".prettierrc", ".prettierrc"));
        assert!(!matches_pattern(".prettierrc.json", ".prettierrc"));
    }

    #[test]
    fn bare_prettierrc_does_not_match_dotted_glob() {
        // The scaffolded default is `.prettierrc`, which the `.prettierrc.*`
        // probe intentionally does not recognize.
        assert!(!matches_pattern(".prettierrc", ".prettierrc.*"));
    }

    #[test]
    fn finds_matching_file_in_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".eslintrc.json"), "{}").unwrap();

        assert!(config_file_exists(temp.path(), ".eslintrc.*"));
        assert!(!config_file_exists(temp.path(), ".prettierrc.*"));
    }

    #[test]
    fn empty_directory_has_no_matches() {
        let temp = TempDir::new().unwrap();
        assert!(!config_file_exists(temp.path(), ".eslintrc.*"));
    }

    #[test]
    fn missing_directory_is_no_match() {
        assert!(!config_file_exists(
            Path::new("/nonexistent/path/xyz"),
            ".eslintrc.*"
        ));
    }
}
