//! Configuration seen through the binary: which files are found, how they
//! layer, and what the analysis actually does with the resulting settings.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

const TEXT: &str = "Rust code compiles. Rust code runs fast. Cats sleep all day. \
                    Rust code is safe and rust code is fun.";

/// A scratch project with its own home directory, so no real user config leaks in.
struct Sandbox {
    tmp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let sandbox = Self {
            tmp: TempDir::new().unwrap(),
        };
        std::fs::create_dir_all(sandbox.path("home")).unwrap();
        std::fs::create_dir_all(sandbox.path("project")).unwrap();
        sandbox
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.tmp.path().join(relative)
    }

    fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[allow(deprecated)]
    fn cmd(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        cmd.env("HOME", self.path("home"))
            .env("XDG_CONFIG_HOME", self.path("home/.config"))
            .env_remove("FAST_TEXT_ANALYZER_SUMMARY_SENTENCES")
            .env_remove("FAST_TEXT_ANALYZER_KEYWORD_COUNT")
            .env_remove("FAST_TEXT_ANALYZER_MAX_INPUT_BYTES")
            .env_remove("FAST_TEXT_ANALYZER_KEEP_MARKDOWN")
            .arg("-C")
            .arg(dir);
        cmd
    }

    /// Settings reported by `info --json` when run from `dir`.
    fn settings(&self, dir: &str) -> Value {
        let output = self
            .cmd(&self.path(dir))
            .args(["--json", "info"])
            .assert()
            .success();
        let info: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
        info["config"].clone()
    }

    /// `analyze --json` output when run from `dir`.
    fn analyze(&self, dir: &str, args: &[&str]) -> Value {
        let output = self
            .cmd(&self.path(dir))
            .args(["--json", "analyze"])
            .args(args)
            .assert()
            .success();
        serde_json::from_slice(&output.get_output().stdout).unwrap()
    }
}

fn file_name(settings: &Value) -> &str {
    let reported = settings["config_file"].as_str().expect("a config file");
    Path::new(reported).file_name().unwrap().to_str().unwrap()
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn defaults_apply_without_any_file() {
    let sandbox = Sandbox::new();
    let settings = sandbox.settings("project");

    assert!(settings.get("config_file").is_none());
    assert_eq!(settings["summary_sentences"], 3);
    assert_eq!(settings["keyword_count"], 5);
    assert_eq!(settings["max_input_bytes"], 5 * 1024 * 1024);
    assert_eq!(settings["keep_markdown"], false);
}

#[test]
fn every_file_name_and_format_is_recognized() {
    for (name, contents) in [
        ("fta.toml", "keyword_count = 2\n"),
        (".fta.yaml", "keyword_count: 2\n"),
        ("fta.yml", "keyword_count: 2\n"),
        ("fast-text-analyzer.json", r#"{"keyword_count": 2}"#),
        (".fast-text-analyzer.toml", "keyword_count = 2\n"),
    ] {
        let sandbox = Sandbox::new();
        sandbox.write(&format!("project/{name}"), contents);

        let settings = sandbox.settings("project");

        assert_eq!(settings["keyword_count"], 2, "{name}");
        assert_eq!(file_name(&settings), name);
    }
}

#[test]
fn nearest_directory_with_config_wins() {
    let sandbox = Sandbox::new();
    sandbox.write("project/fta.toml", "summary_sentences = 4\nkeyword_count = 4\n");
    sandbox.write("project/docs/fta.toml", "keyword_count = 1\n");
    std::fs::create_dir_all(sandbox.path("project/docs/drafts")).unwrap();

    let settings = sandbox.settings("project/docs/drafts");

    // only the nearest directory is read; nothing merges from further up
    assert_eq!(settings["keyword_count"], 1);
    assert_eq!(settings["summary_sentences"], 3);
}

#[test]
fn search_stops_at_repository_root() {
    let sandbox = Sandbox::new();
    sandbox.write("fta.toml", "keyword_count = 9\n");
    std::fs::create_dir_all(sandbox.path("project/.git")).unwrap();
    std::fs::create_dir_all(sandbox.path("project/src")).unwrap();

    assert_eq!(sandbox.settings("project/src")["keyword_count"], 5);

    sandbox.write("project/fta.toml", "keyword_count = 6\n");
    assert_eq!(sandbox.settings("project/src")["keyword_count"], 6);
}

#[test]
fn long_name_beats_short_name_in_one_directory() {
    let sandbox = Sandbox::new();
    sandbox.write("project/fta.toml", "summary_sentences = 1\nkeyword_count = 1\n");
    sandbox.write("project/fast-text-analyzer.toml", "keyword_count = 2\n");

    let settings = sandbox.settings("project");

    assert_eq!(settings["summary_sentences"], 1);
    assert_eq!(settings["keyword_count"], 2);
    assert_eq!(file_name(&settings), "fast-text-analyzer.toml");
}

// =============================================================================
// Layering
// =============================================================================

#[cfg(target_os = "linux")]
#[test]
fn project_file_overrides_user_file_per_key() {
    let sandbox = Sandbox::new();
    sandbox.write(
        "home/.config/fast-text-analyzer/config.toml",
        "summary_sentences = 2\nkeyword_count = 8\n",
    );
    sandbox.write("project/fta.toml", "keyword_count = 3\n");

    let settings = sandbox.settings("project");

    assert_eq!(settings["summary_sentences"], 2);
    assert_eq!(settings["keyword_count"], 3);
}

#[test]
fn explicit_config_overrides_discovered_file() {
    let sandbox = Sandbox::new();
    sandbox.write("project/fta.toml", "summary_sentences = 2\nkeyword_count = 2\n");
    let explicit = sandbox.write("elsewhere/settings.yaml", "keyword_count: 7\n");

    let output = sandbox
        .cmd(&sandbox.path("project"))
        .arg("--config")
        .arg(&explicit)
        .args(["--json", "info"])
        .assert()
        .success();
    let info: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(info["config"]["summary_sentences"], 2);
    assert_eq!(info["config"]["keyword_count"], 7);
    assert_eq!(file_name(&info["config"]), "settings.yaml");
}

#[test]
fn environment_overrides_files() {
    let sandbox = Sandbox::new();
    sandbox.write("project/fta.toml", "keyword_count = 2\n");

    let output = sandbox
        .cmd(&sandbox.path("project"))
        .env("FAST_TEXT_ANALYZER_KEYWORD_COUNT", "1")
        .args(["--json", "analyze", "alpha beta gamma", "--keywords"])
        .assert()
        .success();
    let report: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(report["keywords"], json!(["alpha"]));
}

// =============================================================================
// Settings reach the analysis
// =============================================================================

#[test]
fn summary_and_keyword_sizes_come_from_config() {
    let sandbox = Sandbox::new();
    sandbox.write("project/fta.toml", "summary_sentences = 1\nkeyword_count = 2\n");

    let report = sandbox.analyze("project", &[TEXT, "--summary", "--keywords"]);

    assert_eq!(report["keywords"], json!(["rust", "code"]));
    assert_eq!(report["summary"], "Rust code is safe and rust code is fun.");
}

#[test]
fn flags_beat_configured_sizes() {
    let sandbox = Sandbox::new();
    sandbox.write("project/fta.toml", "summary_sentences = 1\nkeyword_count = 2\n");

    let report = sandbox.analyze(
        "project",
        &[TEXT, "--keywords", "--top-keywords", "1", "--summary", "--sentences", "4"],
    );

    assert_eq!(report["keywords"], json!(["rust"]));
    assert_eq!(report["summary"], TEXT);
}

#[test]
fn keep_markdown_analyzes_raw_file() {
    let sandbox = Sandbox::new();
    let notes = sandbox.write("project/notes.md", "# Heading Words\n\nOne sentence here.\n");
    let notes = notes.to_str().unwrap();

    assert_eq!(sandbox.analyze("project", &[notes, "--file"])["words"], 3);

    sandbox.write("project/fta.toml", "keep_markdown = true\n");
    assert_eq!(sandbox.analyze("project", &[notes, "--file"])["words"], 5);
}

#[test]
fn max_input_bytes_limits_files() {
    let sandbox = Sandbox::new();
    sandbox.write("project/fta.toml", "max_input_bytes = 8\n");
    let big = sandbox.write("project/big.txt", "This file is longer than eight bytes.");
    let exact = sandbox.write("project/exact.txt", "Tiny one");

    sandbox
        .cmd(&sandbox.path("project"))
        .arg("analyze")
        .arg(&big)
        .arg("--file")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
    assert_eq!(
        sandbox.analyze("project", &[exact.to_str().unwrap(), "--file"])["words"],
        2
    );
}

#[test]
fn disabled_limit_accepts_any_size() {
    let sandbox = Sandbox::new();
    sandbox.write(
        "project/fta.toml",
        "max_input_bytes = 8\ndisable_input_limit = true\n",
    );
    let big = sandbox.write("project/big.txt", "This file is longer than eight bytes.");

    assert!(sandbox.settings("project").get("max_input_bytes").is_none());
    let report = sandbox.analyze("project", &[big.to_str().unwrap(), "--file"]);
    assert_eq!(report["words"], 7);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn malformed_config_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write("project/fta.toml", "keyword_count = \"several\"\n");

    sandbox
        .cmd(&sandbox.path("project"))
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}
