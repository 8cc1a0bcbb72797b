//! Info command: package metadata and the effective configuration.

use std::fmt::Display;

use clap::Args;
use fast_text_analyzer_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

/// Everything `info` reports, in the shape printed by `--json`.
#[derive(Serialize)]
struct InfoReport {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
    config: Settings,
}

/// The settings an analysis run will use.
#[derive(Serialize)]
struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    summary_sentences: usize,
    keyword_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    keep_markdown: bool,
}

impl Settings {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.effective_file().map(ToString::to_string),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            summary_sentences: config.summary_sentences(),
            keyword_count: config.keyword_count(),
            max_input_bytes: config.input_limit(),
            keep_markdown: config.keep_markdown,
        }
    }
}

impl InfoReport {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
            config: Settings::new(config, sources),
        }
    }

    fn print(&self) {
        println!("{} {}", self.name.bold(), self.version.green());
        if !self.description.is_empty() {
            println!("{}", self.description);
        }
        if !self.license.is_empty() {
            field("License", self.license);
        }

        let settings = &self.config;
        heading("Configuration");
        match &settings.config_file {
            Some(path) => field("Config file", path.cyan()),
            None => field("Config file", "none loaded".yellow()),
        }
        field("Log level", settings.log_level);
        if let Some(dir) = &settings.log_dir {
            field("Log directory", dir);
        }

        heading("Analysis");
        field("Summary sentences", settings.summary_sentences);
        field("Keywords", settings.keyword_count);
        match settings.max_input_bytes {
            Some(max) => field("Input limit", format_args!("{max} bytes")),
            None => field("Input limit", "disabled".yellow()),
        }
        field("Keep markdown", settings.keep_markdown);
    }
}

fn heading(title: &str) {
    println!();
    println!("{}", title.bold().underline());
}

fn field(label: &str, value: impl Display) {
    println!("{}: {value}", label.dimmed());
}

/// Print the package name, version and effective settings.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");
    let report = InfoReport::new(config, sources);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(())
}
