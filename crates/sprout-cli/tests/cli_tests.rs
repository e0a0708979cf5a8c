//! End-to-end tests of the `sprout` binary.

use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `sprout` running in `dir` with an empty config file and no colour.
fn sprout(dir: &Path) -> Command {
    let config = dir.join("sprout-test-config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }

    let mut cmd = Command::cargo_bin("sprout").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("SPROUT_TEMPLATES_DIR")
        .env_remove("SPROUT__DEFAULTS__LANGUAGE")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config);
    cmd
}

fn git_available() -> bool {
    StdCommand::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

// ── list / version / completions ─────────────────────────────────────────────

#[test]
fn list_prints_bundled_languages() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("c\ncpp\ngo\npython\nrust\n");
}

#[test]
fn list_as_json() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout("[\"c\",\"cpp\",\"go\",\"python\",\"rust\"]\n");
}

#[test]
fn list_honours_templates_dir_override() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("my-templates");
    fs::create_dir_all(templates.join("zig")).unwrap();
    fs::write(templates.join("zig/build.zig"), "").unwrap();

    sprout(tmp.path())
        .env("SPROUT_TEMPLATES_DIR", &templates)
        .arg("list")
        .assert()
        .success()
        .stdout("zig\n");
}

#[test]
fn version_is_one_line() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not())
        .stdout(predicate::str::contains("Tag:").not());
}

#[test]
fn verbose_version_lists_fields() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .args(["version", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Tag: "))
        .stdout(predicate::str::contains("Dirty: "));
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprout"));
}

// ── new ──────────────────────────────────────────────────────────────────────

#[test]
fn dry_run_lists_paths_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .args(["new", "demo", "--lang", "go", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Creating project with language: go, project name: demo\n\
             Dry-run mode: no files will be created\n",
        ))
        .stdout(predicate::str::contains("  create demo/go.mod\n"))
        .stdout(predicate::str::contains("  create demo/scripts/\n"))
        .stdout(predicate::str::contains(".tmpl").not())
        .stdout(predicate::str::contains("Project created successfully").not());

    assert!(!tmp.path().join("demo").exists());
}

#[test]
fn quiet_dry_run_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .args(["-q", "new", "demo", "--lang", "go", "-n"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn invalid_name_is_rejected() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .args(["new", "../../etc", "--lang", "go"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("invalid project name"));
}

#[test]
fn unsupported_language_fails_before_banner() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .args(["new", "demo", "--lang", "cobol"])
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("unsupported language: cobol"))
        .stderr(predicate::str::contains("rust"));

    assert!(!tmp.path().join("demo").exists());
}

#[test]
fn missing_language_is_a_user_error() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .args(["new", "demo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no language given"));
}

#[test]
fn existing_directory_needs_force() {
    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("demo");
    fs::create_dir(&dest).unwrap();
    fs::write(dest.join("keep.txt"), "mine").unwrap();

    sprout(tmp.path())
        .args(["new", "demo", "--lang", "go"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(dest.join("keep.txt")).unwrap(), "mine");
}

#[test]
fn config_file_supplies_default_language() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("sprout-test-config.toml"),
        "[defaults]\nlanguage = \"rust\"\n",
    )
    .unwrap();

    sprout(tmp.path())
        .args(["new", "demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language: rust"))
        .stdout(predicate::str::contains("  create demo/Cargo.toml\n"));
}

#[test]
fn environment_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("sprout-test-config.toml"),
        "[defaults]\nlanguage = \"rust\"\n",
    )
    .unwrap();

    sprout(tmp.path())
        .env("SPROUT__DEFAULTS__LANGUAGE", "python")
        .args(["new", "demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language: python"));
}

#[test]
fn creates_and_commits_a_project() {
    if !git_available() {
        eprintln!("git not installed; skipping");
        return;
    }

    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .env("GIT_AUTHOR_NAME", "Sprout Test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Sprout Test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("HOME", tmp.path())
        .args(["new", "demo", "--lang", "go", "-m", "example.com/demo", "--author", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Project created successfully\n"));

    let dest = tmp.path().join("demo");
    let go_mod = fs::read_to_string(dest.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module example.com/demo\n"));
    assert!(dest.join(".git").is_dir());

    let log = StdCommand::new("git")
        .args(["log", "--format=%s"])
        .current_dir(&dest)
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&log.stdout).trim(), "Initial commit");
}

// ── config ───────────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_file_values() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("sprout-test-config.toml"),
        "[vcs]\ntimeout_secs = 30\n",
    )
    .unwrap();

    sprout(tmp.path())
        .args(["config", "get", "vcs.timeout_secs"])
        .assert()
        .success()
        .stdout("30\n");
}

#[test]
fn config_get_unknown_key_is_a_config_error() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn config_path_reports_explicit_file() {
    let tmp = TempDir::new().unwrap();
    sprout(tmp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprout-test-config.toml"));
}

#[test]
fn missing_config_file_exits_4() {
    let tmp = TempDir::new().unwrap();
    Command::cargo_bin("sprout")
        .unwrap()
        .current_dir(tmp.path())
        .env("NO_COLOR", "1")
        .args(["--config", "does-not-exist.toml", "list"])
        .assert()
        .code(4);
}
