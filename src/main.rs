//! Word Filter - CLI
//!
//! Letter-criteria word filter with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;
use wordle_filter::{
    commands::{BenchmarkConfig, FilterConfig, run_benchmark, run_filter, run_simple},
    core::Criterion,
    filter::{LoadStatus, PAGE_SIZE, Session, SessionConfig},
    output::{print_benchmark_result, print_filter_report},
    wordlists::loader::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Filter five-letter words by letter position and presence",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a .json ({"data": [...]}) or plain text file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Results revealed per page
    #[arg(long, global = true, default_value_t = PAGE_SIZE)]
    page_size: usize,

    /// Quiet period after an edit before results are recomputed
    #[arg(long, global = true, default_value_t = 0)]
    debounce_ms: u64,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based criteria editor without TUI)
    Simple,

    /// Apply criteria once and print the matches
    Filter {
        /// Criterion as kind:scope:letters, e.g. is:1:a or exclude:all:xyz (repeatable)
        #[arg(short, long = "criterion")]
        criteria: Vec<Criterion>,

        /// Number of result pages to show
        #[arg(short, long, default_value_t = 1)]
        pages: usize,

        /// Show every match
        #[arg(short, long)]
        all: bool,
    },

    /// Benchmark compile + filter throughput with random criteria
    Benchmark {
        /// Number of random criteria lists to test
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Most criteria per trial
        #[arg(long, default_value_t = 4)]
        max_criteria: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            page_size: self.page_size,
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

/// Route logs to `log_file` when given; otherwise to stderr unless the TUI owns the terminal
fn init_logging(log_file: Option<&PathBuf>, is_tui: bool) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format_timestamp_secs();

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if is_tui {
        return Ok(());
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let session_config = cli.session_config();
    let source = WordSource::from_arg(&cli.wordlist);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_ref(), matches!(command, Commands::Play))?;
    log::info!("word source: {source}");

    match command {
        Commands::Play => run_play_command(source, session_config),
        Commands::Simple => run_simple_command(&source, session_config),
        Commands::Filter {
            criteria,
            pages,
            all,
        } => run_filter_command(&source, criteria, pages, all, session_config),
        Commands::Benchmark {
            count,
            max_criteria,
            seed,
        } => run_benchmark_command(&source, count, max_criteria, seed),
    }
}

fn run_filter_command(
    source: &WordSource,
    criteria: Vec<Criterion>,
    pages: usize,
    show_all: bool,
    session_config: SessionConfig,
) -> Result<()> {
    let corpus = source
        .load()
        .with_context(|| format!("cannot load {source}"))?;

    let mut config = FilterConfig::new(criteria);
    config.pages = pages.max(1);
    config.show_all = show_all;

    let report = run_filter(corpus, config, session_config);
    print_filter_report(&report);
    Ok(())
}

fn run_benchmark_command(
    source: &WordSource,
    count: usize,
    max_criteria: usize,
    seed: Option<u64>,
) -> Result<()> {
    let corpus = source
        .load()
        .with_context(|| format!("cannot load {source}"))?;

    println!(
        "Running benchmark: {count} random criteria lists over {} words...",
        corpus.len()
    );

    let mut config = BenchmarkConfig::new(count);
    config.max_criteria = max_criteria.max(1);
    config.seed = seed;

    let result = run_benchmark(&corpus, &config);
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command(source: &WordSource, session_config: SessionConfig) -> Result<()> {
    let mut session = Session::new(session_config);
    session.begin_load();
    session.finish_load(source.load());

    if let LoadStatus::Failed(reason) = session.status() {
        eprintln!(
            "{} {reason} (continuing with an empty word list)",
            "Warning:".yellow().bold()
        );
    }

    run_simple(&mut session)?;
    Ok(())
}

fn run_play_command(source: WordSource, session_config: SessionConfig) -> Result<()> {
    use wordle_filter::interactive::{App, run_tui};

    let app = App::new(Session::new(session_config), source);
    run_tui(app)
}
