//! pagestat main entry point
//!
//! This is the command-line interface: it gathers the URL and database name
//! (from arguments or interactive prompts), runs the pipeline and prints the
//! report.

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use pagestat::config::{load_config_or_default, Config};
use pagestat::extract::HtmlParser;
use pagestat::output::{print_report, write_markdown_report};
use pagestat::pipeline::{process_document, DocumentSource, FetchError, HttpSource, Report};
use pagestat::prompt::{read_line, retry_bounded, retry_bounded_async};
use pagestat::storage::{resolve_destination, RecordStore, SqliteStore};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// pagestat: word, tag, link and image statistics for a web page
///
/// Fetches the page, stores word and tag frequencies plus every link and
/// image source in a new SQLite database, and prints the most used words
/// and tags.
#[derive(Parser, Debug)]
#[command(name = "pagestat")]
#[command(version)]
#[command(about = "Word, tag, link and image statistics for a web page", long_about = None)]
struct Cli {
    /// URL of the page to analyze (asked for when omitted)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Name of the database to create; must not exist yet (asked for when omitted)
    #[arg(short, long, value_name = "NAME")]
    database: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of words and tags to report
    #[arg(short = 'n', long, value_name = "N")]
    top: Option<usize>,

    /// Also write the report as markdown to this file
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Show the report of an existing database and exit
    #[arg(long, value_name = "DB", conflicts_with_all = ["url", "database"])]
    stats: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config =
        load_config_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(path) = &cli.config {
        tracing::info!("Configuration loaded from: {}", path.display());
    }

    if let Some(top) = cli.top {
        if top == 0 {
            bail!("--top must be at least 1");
        }
        config.report.top_n = top;
    }

    if let Some(db) = &cli.stats {
        handle_stats(db, &config, cli.summary.as_deref())
    } else {
        handle_run(&cli, &config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so the report on stdout stays clean.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagestat=info,warn"),
            1 => EnvFilter::new("pagestat=debug,info"),
            2 => EnvFilter::new("pagestat=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --stats mode: prints the report of an existing database
fn handle_stats(db: &Path, config: &Config, summary: Option<&Path>) -> anyhow::Result<()> {
    let mut store = SqliteStore::open(db)
        .with_context(|| format!("Failed to open database {}", db.display()))?;

    let report = Report::load(&store, config.report.top_n)?;
    print_report(&report);

    if let Some(path) = summary {
        write_markdown_report(&report, &db.display().to_string(), path)?;
        tracing::info!("Summary written to: {}", path.display());
    }

    store.close()?;
    Ok(())
}

/// Handles the main mode: fetch, store, report
async fn handle_run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let source = HttpSource::new(&config.fetch)?;
    let max_attempts = config.prompt.max_attempts;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // Fetch before creating the database so a bad URL leaves no empty file behind
    let (url, body) = match &cli.url {
        Some(url) => {
            let body = source
                .fetch(url)
                .await
                .with_context(|| format!("Failed to fetch {}", url))?;
            (url.clone(), body)
        }
        None => {
            let source = &source;
            retry_bounded_async(
                max_attempts,
                || read_line(&mut input, &mut output, "Enter the URL: "),
                move |url: String| async move {
                    let body = source.fetch(&url).await?;
                    Ok::<_, FetchError>((url, body))
                },
            )
            .await?
        }
    };
    tracing::info!("Fetched {} ({} bytes)", url, body.len());

    let extension = config.output.database_extension.as_str();
    let (path, mut store) = match &cli.database {
        Some(name) => {
            let path = resolve_destination(name, extension)
                .ok_or_else(|| anyhow!("Database name cannot be empty"))?;
            let store = SqliteStore::create(&path)?;
            (path, store)
        }
        None => retry_bounded(
            max_attempts,
            || read_line(&mut input, &mut output, "Enter the database filename: "),
            |name| {
                let path = resolve_destination(name, extension)
                    .ok_or_else(|| "Database name cannot be empty".to_string())?;
                SqliteStore::create(&path)
                    .map(|store| (path, store))
                    .map_err(|e| format!("{}. Enter another name.", e))
            },
        )?,
    };
    tracing::info!("Created database: {}", path.display());

    let report = process_document(&HtmlParser, &body, &mut store, config.report.top_n)
        .with_context(|| format!("Failed to process {}", url))?;
    store.close()?;

    print_report(&report);

    if let Some(summary) = &cli.summary {
        write_markdown_report(&report, &url, summary)?;
        tracing::info!("Summary written to: {}", summary.display());
    }

    Ok(())
}
