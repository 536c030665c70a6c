/// Corpus Analyzer - word-list statistics for password and wordlist research
///
/// The main entry point for the corpus analyzer application. It parses
/// command-line arguments, loads the word list and prints or exports the
/// resulting report.

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{error, info, LevelFilter};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use corpus_analyzer::app::run_analyzer;
use corpus_analyzer::utils::output_formatter;
use corpus_analyzer::{AnalyzerConfig, KeywordSet, Report};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "corpus_analyzer",
    version,
    about = "Word-list statistics for password and wordlist research",
    long_about = "Reports structural statistics of a word list:
- Word totals and a length histogram
- Keyword occurrence counts and percentages
- The most repeated character sequences
- The most frequent letters, digits and symbols
- Matches against built-in password-shape rules"
)]
struct Args {
    /// Path to the word list to analyze
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Comma separated keywords (e.g. pass,admin,2024)
    #[arg(short = 'k', long = "keywords")]
    keywords: Option<String>,

    /// Number of entries in each top list (default: 10)
    #[arg(long = "top")]
    top: Option<usize>,

    /// Length of counted character sequences (default: 10)
    #[arg(long = "ngram-length")]
    ngram_length: Option<usize>,

    /// Number of parallel workers (0=auto, default: 1)
    #[arg(long = "parallel")]
    parallel: Option<usize>,

    /// Path to a JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Maximum file size to analyze in MB
    #[arg(long = "max-size", default_value = "512")]
    max_size: u64,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Export the report to a JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Export the report to an HTML file
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Export the report to a CSV file
    #[arg(long = "csv")]
    csv: Option<PathBuf>,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: corpus_analyzer.log)
    #[arg(long = "log-file", default_value = "corpus_analyzer.log")]
    log_file: String,
}

/// Main entry point function
fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    setup_logging(&args);

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        eprintln!("{} {:#}", "Error:".red(), e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // Record the start time
    let start_time = Instant::now();

    let config = load_config(args)?;
    let keywords = args
        .keywords
        .as_deref()
        .map(KeywordSet::parse)
        .unwrap_or_default();
    info!("Keywords: {:?}", keywords.iter().collect::<Vec<_>>());

    let report = run_analyzer(&args.file, &keywords, &config, Some(args.max_size * 1024 * 1024))?;

    export_report(&report, args)?;

    if !args.quiet {
        println!("{}", output_formatter::format_report(&report, args.md));
        println!(
            "{} {:.2} seconds",
            "Time elapsed:".green(),
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

/// Set up logging with file output, falling back to stderr
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(file) = File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
}

/// Build the configuration from the optional file and command line overrides
fn load_config(args: &Args) -> Result<AnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };

    if let Some(top) = args.top {
        config.top = top;
    }
    if let Some(ngram_length) = args.ngram_length {
        config.ngram_length = ngram_length;
    }
    if let Some(parallel) = args.parallel {
        config.workers = parallel;
    }

    config.validate()?;
    Ok(config)
}

/// Export the report in every format requested on the command line
fn export_report(report: &Report, args: &Args) -> Result<()> {
    let exports: [(&Option<PathBuf>, fn(&Report, &Path) -> Result<()>); 3] = [
        (&args.json, output_formatter::export_report_json),
        (&args.html, output_formatter::create_html_report),
        (&args.csv, output_formatter::create_csv_report),
    ];

    for (path, export) in exports {
        if let Some(path) = path {
            export(report, path)?;
            info!("Wrote report to {}", path.display());
        }
    }

    Ok(())
}
