//! Analyze command: counts, language, summary, keywords and readability.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use fast_text_analyzer_core::analysis::{self, AnalysisReport, ReportOptions};
use fast_text_analyzer_core::{Capabilities, Config};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze, or a path with --file, or an address with --url.
    pub source: String,

    /// Treat SOURCE as a file path.
    #[arg(long, conflicts_with = "url")]
    pub file: bool,

    /// Treat SOURCE as an HTTP(S) URL and analyze the response body.
    #[arg(long)]
    pub url: bool,

    /// Print an extractive summary.
    #[arg(long)]
    pub summary: bool,

    /// Detect the language.
    #[arg(long)]
    pub lang: bool,

    /// Count distinct words.
    #[arg(long)]
    pub unique: bool,

    /// Extract the most frequent keywords.
    #[arg(long)]
    pub keywords: bool,

    /// Print the Flesch Reading Ease score.
    #[arg(long)]
    pub readability: bool,

    /// Enable every section.
    #[arg(long)]
    pub all: bool,

    /// Number of sentences in the summary.
    #[arg(long, value_name = "N")]
    pub sentences: Option<usize>,

    /// Number of keywords to extract.
    #[arg(long, value_name = "N")]
    pub top_keywords: Option<usize>,
}

impl AnalyzeArgs {
    /// Sections requested on the command line, sized from flags or config.
    fn report_options(&self, config: &Config) -> ReportOptions {
        let summary_len = self.sentences.unwrap_or_else(|| config.summary_sentences());
        let keyword_len = self
            .top_keywords
            .unwrap_or_else(|| config.keyword_count());

        ReportOptions {
            unique_words: self.all || self.unique,
            language: self.all || self.lang,
            summary: (self.all || self.summary).then_some(summary_len),
            keywords: (self.all || self.keywords).then_some(keyword_len),
            readability: self.all || self.readability,
        }
    }
}

/// Analyze text from an argument, a file, or a URL.
///
/// Word and sentence totals are always printed; every other section is
/// opt-in. With `--json`, prints an [`AnalysisReport`] instead.
#[instrument(name = "cmd_analyze", skip_all, fields(file = args.file, url = args.url))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(?args, "executing analyze command");

    let (content, strip_md) = if args.file {
        let path = Utf8PathBuf::from(&args.source);
        let content = super::read_input_file(&path, max_input)?;
        let strip_md = !config.keep_markdown && path.extension() == Some("md");
        (content, strip_md)
    } else if args.url {
        (super::fetch_url(&args.source, max_input)?, false)
    } else {
        (args.source.clone(), false)
    };

    let options = args.report_options(config);
    let report =
        analysis::run_full_analysis(&content, strip_md, &options, Capabilities::default());

    if global_json {
        let json = serde_json::to_string_pretty(&report)
            .context("failed to serialize analysis report")?;
        println!("{json}");
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!("{} {}", "Total Words:".green().bold(), report.words);
    println!("{} {}", "Total Sentences:".cyan().bold(), report.sentences);

    if let Some(unique) = report.unique_words {
        println!("{} {}", "Unique Words:".yellow(), unique);
    }
    if let Some(ref language) = report.language {
        println!("{} {}", "Language:".magenta(), language);
    }
    if let Some(ref summary) = report.summary {
        println!("{} {}", "Summary:".blue(), summary);
    }
    if let Some(ref keywords) = report.keywords {
        println!("{} {}", "Keywords:".bright_magenta(), keywords.join(", "));
    }
    if let Some(ref readability) = report.readability {
        println!(
            "{} {}",
            "Readability Score:".red().bold(),
            format_score(readability.score)
        );
    }
}

/// Whole scores keep their decimal point (`100.0`, not `100`).
fn format_score(score: f64) -> String {
    format!("{score:?}")
}
