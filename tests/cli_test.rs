//! Integration tests for the hookstrap binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A project directory with an empty `bin/` on PATH, so no external tool
/// (pre-commit included) resolves and every run is deterministic.
fn bare_project() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("nobin");
    fs::create_dir(&bin).unwrap();
    (temp, bin)
}

fn git_project() -> (TempDir, std::path::PathBuf) {
    let (temp, bin) = bare_project();
    fs::create_dir(temp.path().join(".git")).unwrap();
    (temp, bin)
}

fn hookstrap() -> Command {
    Command::new(cargo_bin("hookstrap"))
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = hookstrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scaffold and verify"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = hookstrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_without_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = hookstrap();
    cmd.assert().failure();
    Ok(())
}

#[test]
fn setup_outside_repository_fails() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, bin) = bare_project();
    let mut cmd = hookstrap();
    cmd.current_dir(temp.path()).env("PATH", &bin).arg("setup");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Not a git repository"));
    assert!(!temp.path().join(".pre-commit-config.yaml").exists());
    Ok(())
}

#[test]
fn setup_without_hook_manager_still_scaffolds_files() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, bin) = git_project();
    let mut cmd = hookstrap();
    cmd.current_dir(temp.path()).env("PATH", &bin).arg("setup");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("'pre-commit' command not found"));

    // Config and guide land before the fatal hook-manager check
    let config = fs::read_to_string(temp.path().join(".pre-commit-config.yaml"))?;
    assert!(!config.contains("JavaScript/TypeScript specific hooks"));
    assert!(config.contains("# Branch naming convention"));
    assert!(temp.path().join("GIT_HOOKS_GUIDE.md").exists());
    Ok(())
}

#[test]
fn setup_with_manifest_keeps_js_section_and_writes_lint_defaults(
) -> Result<(), Box<dyn std::error::Error>> {
    let (temp, bin) = git_project();
    fs::write(temp.path().join("package.json"), "{}")?;

    let mut cmd = hookstrap();
    cmd.current_dir(temp.path()).env("PATH", &bin).arg("setup");
    cmd.assert().code(1);

    let config = fs::read_to_string(temp.path().join(".pre-commit-config.yaml"))?;
    assert!(config.contains("JavaScript/TypeScript specific hooks"));

    let eslintrc = fs::read_to_string(temp.path().join(".eslintrc.json"))?;
    let parsed: serde_json::Value = serde_json::from_str(&eslintrc)?;
    assert_eq!(parsed["rules"].as_object().unwrap().len(), 4);
    assert!(temp.path().join(".prettierrc").exists());
    Ok(())
}

#[test]
fn setup_twice_without_overwrite_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, bin) = git_project();
    let config_path = temp.path().join(".pre-commit-config.yaml");

    hookstrap()
        .current_dir(temp.path())
        .env("PATH", &bin)
        .arg("setup")
        .assert()
        .code(1);
    let first = fs::read(&config_path)?;

    hookstrap()
        .current_dir(temp.path())
        .env("PATH", &bin)
        .arg("setup")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
    let second = fs::read(&config_path)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn setup_overwrite_replaces_user_config() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, bin) = git_project();
    let config_path = temp.path().join(".pre-commit-config.yaml");
    fs::write(&config_path, "repos: []")?;

    hookstrap()
        .current_dir(temp.path())
        .env("PATH", &bin)
        .args(["setup", "--overwrite"])
        .assert()
        .code(1);

    let config = fs::read_to_string(&config_path)?;
    assert!(config.contains("black"));
    Ok(())
}

#[test]
fn check_exits_zero_even_when_everything_is_missing() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, bin) = bare_project();
    let mut cmd = hookstrap();
    cmd.current_dir(temp.path()).env("PATH", &bin).arg("check");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Not a git repository."));
    Ok(())
}

#[test]
fn check_strict_maps_errors_to_nonzero_exit() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, bin) = bare_project();
    let mut cmd = hookstrap();
    cmd.current_dir(temp.path())
        .env("PATH", &bin)
        .args(["check", "--strict"]);
    cmd.assert().code(1);
    Ok(())
}

#[test]
fn check_json_reports_error_status() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, bin) = bare_project();
    let mut cmd = hookstrap();
    cmd.current_dir(temp.path())
        .env("PATH", &bin)
        .args(["check", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let report: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(report["status"], "error");
    assert!(report["errors"]
        .as_array()
        .unwrap()
        .iter()
        .any(|m| m == "Not a git repository."));
    Ok(())
}

#[test]
fn project_flag_overrides_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, bin) = bare_project();
    let elsewhere = TempDir::new()?;

    let mut cmd = hookstrap();
    cmd.current_dir(elsewhere.path())
        .env("PATH", &bin)
        .args(["--project", temp.path().to_str().unwrap(), "setup"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Not a git repository"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = hookstrap();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hookstrap"));
    Ok(())
}

/// Tests that stand in real (stubbed) external tools on PATH.
#[cfg(unix)]
mod stubbed {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn write_stub(bin: &Path, name: &str, body: &str) {
        let path = bin.join(name);
        fs::write(&path, body).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }

    /// Populate `bin` with a `which` that resolves against it, a pre-commit
    /// stub, and every tool the registry checks for.
    fn stub_toolchain(bin: &Path) {
        write_stub(bin, "which", "#!/bin/sh\ncommand -v \"$1\"\n");
        write_stub(bin, "pre-commit", "#!/bin/sh\necho \"pre-commit 3.7.1\"\n");
        for tool in ["cz", "black", "flake8", "isort", "prettier", "eslint"] {
            write_stub(bin, tool, "#!/bin/sh\nexit 0\n");
        }
    }

    fn installed_hook_script() -> String {
        "#!/usr/bin/env bash\n\
         # File generated by pre-commit: https://pre-commit.com\n\
         INSTALL_PYTHON=/usr/bin/python3\n\
         exec pre-commit hook-impl \"$@\"\n"
            .to_string()
    }

    #[test]
    fn setup_succeeds_with_full_toolchain() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin) = git_project();
        stub_toolchain(&bin);

        let mut cmd = hookstrap();
        cmd.current_dir(temp.path()).env("PATH", &bin).arg("setup");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Setup complete"));

        assert!(temp.path().join(".pre-commit-config.yaml").exists());
        assert!(temp.path().join("GIT_HOOKS_GUIDE.md").exists());
        Ok(())
    }

    #[test]
    fn check_reports_success_on_fully_set_up_project() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin) = git_project();
        stub_toolchain(&bin);

        let hooks_dir = temp.path().join(".git/hooks");
        fs::create_dir_all(&hooks_dir)?;
        for hook_type in ["pre-commit", "commit-msg", "pre-push"] {
            fs::write(hooks_dir.join(hook_type), installed_hook_script())?;
        }
        fs::write(temp.path().join(".pre-commit-config.yaml"), "repos: []")?;
        fs::write(temp.path().join("GIT_HOOKS_GUIDE.md"), "# Git Hooks Guide")?;

        let mut cmd = hookstrap();
        cmd.current_dir(temp.path()).env("PATH", &bin).arg("check");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Setup looks good"))
            .stdout(predicate::str::contains("'pre-commit' command found (3.7.1)"));
        Ok(())
    }

    #[test]
    fn check_json_reports_success_status() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin) = git_project();
        stub_toolchain(&bin);

        let hooks_dir = temp.path().join(".git/hooks");
        fs::create_dir_all(&hooks_dir)?;
        for hook_type in ["pre-commit", "commit-msg", "pre-push"] {
            fs::write(hooks_dir.join(hook_type), installed_hook_script())?;
        }
        fs::write(temp.path().join(".pre-commit-config.yaml"), "repos: []")?;
        fs::write(temp.path().join("GIT_HOOKS_GUIDE.md"), "# Git Hooks Guide")?;

        let mut cmd = hookstrap();
        cmd.current_dir(temp.path())
            .env("PATH", &bin)
            .args(["check", "--json"]);
        let output = cmd.assert().success().get_output().stdout.clone();

        let report: serde_json::Value = serde_json::from_slice(&output)?;
        assert_eq!(report["status"], "success");
        assert!(report["warnings"].as_array().unwrap().is_empty());
        assert!(report["errors"].as_array().unwrap().is_empty());
        Ok(())
    }

    #[test]
    fn failed_hook_install_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
        let (temp, bin) = git_project();
        stub_toolchain(&bin);
        // Manager resolves but every install invocation fails
        write_stub(
            &bin,
            "pre-commit",
            "#!/bin/sh\necho \"boom\" >&2\nexit 1\n",
        );

        let mut cmd = hookstrap();
        cmd.current_dir(temp.path()).env("PATH", &bin).arg("setup");
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to install"));
        Ok(())
    }
}
