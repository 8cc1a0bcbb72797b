//! Settings for the analyzer and where they come from.
//!
//! Sources are merged lowest to highest:
//!
//! 1. Built-in defaults
//! 2. `~/.config/fast-text-analyzer/config.<ext>`
//! 3. The nearest directory (walking up from the start directory, stopping
//!    at `.git`) that holds any of `.fta.<ext>`, `fta.<ext>`,
//!    `.fast-text-analyzer.<ext>`, `fast-text-analyzer.<ext>`; every match
//!    in that directory is merged in that order
//! 4. Files passed with `--config`
//! 5. `FAST_TEXT_ANALYZER_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`, merged in that order.
//!
//! ```no_run
//! use fast_text_analyzer_core::config::ConfigLoader;
//!
//! let (config, sources) = ConfigLoader::new().search_from(".").load()?;
//! println!(
//!     "{} summary sentences from {:?}",
//!     config.summary_sentences(),
//!     sources.effective_file()
//! );
//! # Ok::<(), fast_text_analyzer_core::ConfigError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::analysis::reports::{DEFAULT_KEYWORD_COUNT, DEFAULT_SUMMARY_SENTENCES};
use crate::error::{ConfigError, ConfigResult};

const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
const FILE_STEMS: [&str; 2] = ["fta", "fast-text-analyzer"];
const APP_DIR: &str = "fast-text-analyzer";
const ENV_PREFIX: &str = "FAST_TEXT_ANALYZER_";

/// Analyzer settings. Every key is optional in config files.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Console log level.
    pub log_level: LogLevel,
    /// Directory for the JSONL log file; no file logging when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Summary length used when `--sentences` is absent.
    pub summary_sentences: Option<usize>,
    /// Keyword count used when `--top-keywords` is absent.
    pub keyword_count: Option<usize>,
    /// Largest file or downloaded page accepted, in bytes (default 5 MiB).
    pub max_input_bytes: Option<usize>,
    /// Accept input of any size, ignoring `max_input_bytes`.
    pub disable_input_limit: bool,
    /// Analyze `.md` files verbatim instead of stripping them to prose.
    pub keep_markdown: bool,
}

impl Config {
    /// Summary length, falling back to the built-in default.
    pub fn summary_sentences(&self) -> usize {
        self.summary_sentences.unwrap_or(DEFAULT_SUMMARY_SENTENCES)
    }

    /// Keyword count, falling back to the built-in default.
    pub fn keyword_count(&self) -> usize {
        self.keyword_count.unwrap_or(DEFAULT_KEYWORD_COUNT)
    }

    /// Effective input limit in bytes, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Console log level.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-query detail.
    Debug,
    /// Normal operation (default).
    #[default]
    Info,
    /// Problems that did not stop the run.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Lowercase name, usable as an `EnvFilter` directive.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The files a [`ConfigLoader`] actually merged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// User-level config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Utf8PathBuf>,
    /// Project files from the nearest matching directory, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project: Vec<Utf8PathBuf>,
    /// Files given explicitly, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The highest-precedence file that was merged, if any.
    pub fn effective_file(&self) -> Option<&Utf8Path> {
        self.explicit
            .last()
            .or_else(|| self.project.last())
            .or(self.user.as_ref())
            .map(Utf8PathBuf::as_path)
    }
}

/// Builds a [`Config`] from every source that applies.
#[derive(Debug)]
pub struct ConfigLoader {
    start_dir: Option<Utf8PathBuf>,
    user_config: bool,
    stop_marker: Option<String>,
    explicit: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads user config and stops the project search at `.git`.
    pub fn new() -> Self {
        Self {
            start_dir: None,
            user_config: true,
            stop_marker: Some(".git".to_string()),
            explicit: Vec::new(),
        }
    }

    /// Look for project config starting in `dir` and walking up.
    pub fn search_from(mut self, dir: impl AsRef<Utf8Path>) -> Self {
        self.start_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Whether to read `~/.config/fast-text-analyzer/config.<ext>`.
    pub const fn include_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Stop walking up after a directory containing `marker`; `None` walks to the root.
    pub fn stop_at(mut self, marker: Option<&str>) -> Self {
        self.stop_marker = marker.map(str::to_string);
        self
    }

    /// Merge `path` above every discovered file. Later calls win.
    pub fn with_file(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.explicit.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge all sources and deserialize.
    #[tracing::instrument(skip(self), fields(start_dir = ?self.start_dir))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = ConfigSources {
            user: self.user_config.then(user_config_file).flatten(),
            project: self
                .start_dir
                .as_deref()
                .map(|dir| self.discover_project(dir))
                .unwrap_or_default(),
            explicit: self.explicit,
        };

        let figment = sources
            .user
            .iter()
            .chain(&sources.project)
            .chain(&sources.explicit)
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                merge_file,
            )
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(
            file = ?sources.effective_file(),
            summary_sentences = config.summary_sentences(),
            keyword_count = config.keyword_count(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Config files in the nearest directory at or above `start` that has any.
    fn discover_project(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        for dir in start.ancestors() {
            let found = project_files_in(dir);
            if !found.is_empty() {
                return found;
            }
            // A config beside the marker still counts; only stop going further up.
            if dir != start
                && let Some(marker) = &self.stop_marker
                && dir.join(marker).exists()
            {
                break;
            }
        }
        Vec::new()
    }
}

/// Existing project config files in `dir`, lowest precedence first.
fn project_files_in(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    FILE_STEMS
        .iter()
        .flat_map(|stem| [format!(".{stem}"), (*stem).to_string()])
        .flat_map(|name| EXTENSIONS.map(|ext| dir.join(format!("{name}.{ext}"))))
        .filter(|path| path.is_file())
        .collect()
}

fn user_config_file() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8PathBuf) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// Per-user config directory, e.g. `~/.config/fast-text-analyzer` on Linux.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_DIR)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that touch `FAST_TEXT_ANALYZER_*` variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct Workspace {
        _tmp: TempDir,
        root: Utf8PathBuf,
    }

    impl Workspace {
        fn new() -> Self {
            let tmp = TempDir::new().unwrap();
            let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
            Self { _tmp: tmp, root }
        }

        fn write(&self, relative: &str, contents: &str) -> Utf8PathBuf {
            let path = self.root.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, contents).unwrap();
            path
        }

        fn dir(&self, relative: &str) -> Utf8PathBuf {
            let path = self.root.join(relative);
            fs::create_dir_all(&path).unwrap();
            path
        }

        fn load_from(&self, relative: &str) -> (Config, ConfigSources) {
            isolated().search_from(self.dir(relative)).load().unwrap()
        }
    }

    fn isolated() -> ConfigLoader {
        ConfigLoader::new().include_user_config(false).stop_at(None)
    }

    #[test]
    fn defaults_without_any_file() {
        let (config, sources) = isolated().load().unwrap();
        assert_eq!(config.summary_sentences(), 3);
        assert_eq!(config.keyword_count(), 5);
        assert_eq!(config.input_limit(), Some(5 * 1024 * 1024));
        assert!(!config.keep_markdown);
        assert!(sources.effective_file().is_none());
    }

    #[test]
    fn every_setting_reads_from_toml() {
        let ws = Workspace::new();
        let path = ws.write(
            "settings.toml",
            r#"log_level = "warn"
log_dir = "/var/log/fta"
summary_sentences = 2
keyword_count = 8
max_input_bytes = 4096
keep_markdown = true
"#,
        );

        let (config, sources) = isolated().with_file(&path).load().unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.log_dir.as_deref(), Some(Utf8Path::new("/var/log/fta")));
        assert_eq!(config.summary_sentences(), 2);
        assert_eq!(config.keyword_count(), 8);
        assert_eq!(config.input_limit(), Some(4096));
        assert!(config.keep_markdown);
        assert_eq!(sources.effective_file(), Some(path.as_path()));
    }

    #[test]
    fn yaml_and_json_formats() {
        let ws = Workspace::new();
        let yaml = ws.write("a.yml", "summary_sentences: 6\n");
        let json = ws.write("b.json", r#"{"keyword_count": 11}"#);

        let (config, _) = isolated().with_file(&yaml).with_file(&json).load().unwrap();

        assert_eq!(config.summary_sentences(), 6);
        assert_eq!(config.keyword_count(), 11);
    }

    #[test]
    fn later_explicit_file_wins_per_key() {
        let ws = Workspace::new();
        let base = ws.write("base.toml", "keyword_count = 2\nsummary_sentences = 4\n");
        let top = ws.write("top.toml", "keyword_count = 9\n");

        let (config, sources) = isolated().with_file(&base).with_file(&top).load().unwrap();

        assert_eq!(config.keyword_count(), 9);
        assert_eq!(config.summary_sentences(), 4);
        assert_eq!(sources.explicit, vec![base, top.clone()]);
        assert_eq!(sources.effective_file(), Some(top.as_path()));
    }

    #[test]
    fn discovery_walks_up_to_nearest_directory() {
        let ws = Workspace::new();
        ws.write("fta.toml", "keyword_count = 1\n");
        ws.write("project/.fta.toml", "summary_sentences = 7\n");

        let (config, sources) = ws.load_from("project/src/deep");

        // Only the nearest directory contributes.
        assert_eq!(config.summary_sentences(), 7);
        assert_eq!(config.keyword_count(), 5);
        assert_eq!(sources.project.len(), 1);
    }

    #[test]
    fn same_directory_precedence() {
        let ws = Workspace::new();
        ws.write(".fta.toml", "summary_sentences = 1\nkeyword_count = 1\nmax_input_bytes = 1\n");
        ws.write("fta.json", r#"{"keyword_count": 2, "max_input_bytes": 2}"#);
        ws.write(".fast-text-analyzer.yaml", "max_input_bytes: 3\n");

        let (config, sources) = ws.load_from(".");

        assert_eq!(config.summary_sentences(), 1);
        assert_eq!(config.keyword_count(), 2);
        assert_eq!(config.input_limit(), Some(3));
        let names: Vec<_> = sources.project.iter().filter_map(|p| p.file_name()).collect();
        assert_eq!(names, [".fta.toml", "fta.json", ".fast-text-analyzer.yaml"]);
    }

    #[test]
    fn marker_stops_search_but_its_own_directory_counts() {
        let ws = Workspace::new();
        ws.write("outer/fta.toml", "keyword_count = 3\n");
        ws.dir("outer/repo/.git");
        ws.dir("outer/repo/src");

        let loader = || ConfigLoader::new().include_user_config(false);

        let (config, sources) = loader()
            .search_from(ws.root.join("outer/repo/src"))
            .load()
            .unwrap();
        assert_eq!(config.keyword_count(), 5);
        assert!(sources.project.is_empty());

        ws.write("outer/repo/fta.toml", "keyword_count = 4\n");
        let (config, _) = loader()
            .search_from(ws.root.join("outer/repo/src"))
            .load()
            .unwrap();
        assert_eq!(config.keyword_count(), 4);
    }

    #[test]
    fn explicit_file_beats_discovered_project_file() {
        let ws = Workspace::new();
        ws.write("fta.toml", "keep_markdown = true\nsummary_sentences = 2\n");
        let explicit = ws.write("ci/override.toml", "keep_markdown = false\n");

        let (config, sources) = isolated()
            .search_from(&ws.root)
            .with_file(&explicit)
            .load()
            .unwrap();

        assert!(!config.keep_markdown);
        assert_eq!(config.summary_sentences(), 2);
        assert_eq!(sources.project.len(), 1);
        assert_eq!(sources.effective_file(), Some(explicit.as_path()));
    }

    #[test]
    fn disable_input_limit_ignores_max() {
        let ws = Workspace::new();
        let path = ws.write("fta.toml", "max_input_bytes = 10\ndisable_input_limit = true\n");

        let (config, _) = isolated().with_file(&path).load().unwrap();

        assert_eq!(config.max_input_bytes, Some(10));
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn wrong_type_is_a_deserialize_error() {
        let ws = Workspace::new();
        let path = ws.write("fta.toml", "keyword_count = \"many\"\n");

        let result = isolated().with_file(&path).load();

        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let ws = Workspace::new();
        let path = ws.write("fta.toml", "keyword_count = 4\nfavourite_colour = \"teal\"\n");

        let (config, _) = isolated().with_file(&path).load().unwrap();

        assert_eq!(config.keyword_count(), 4);
    }

    #[test]
    #[allow(unsafe_code)]
    fn environment_beats_files() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let ws = Workspace::new();
        let path = ws.write("fta.toml", "keep_markdown = false\n");

        // SAFETY: ENV_LOCK serializes environment access in this module.
        unsafe { std::env::set_var("FAST_TEXT_ANALYZER_KEEP_MARKDOWN", "true") };
        let result = isolated().with_file(&path).load();
        // SAFETY: as above.
        unsafe { std::env::remove_var("FAST_TEXT_ANALYZER_KEEP_MARKDOWN") };

        assert!(result.unwrap().0.keep_markdown);
    }

    #[test]
    fn log_level_names() {
        let config: Config = serde_yaml::from_str("log_level: error\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(LogLevel::Debug.as_str(), "debug");
        assert!(serde_yaml::from_str::<Config>("log_level: loud\n").is_err());
    }

    #[test]
    fn user_config_dir_is_app_specific() {
        if let Some(dir) = user_config_dir() {
            assert!(dir.as_str().contains(APP_DIR));
        }
    }
}
