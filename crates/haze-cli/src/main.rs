//! Haze CLI entry point.
//!
//! Provides command-line tools for phonetic round trips:
//! - `haze transform` - Haze text through a bridge language
//! - `haze rehaze` - Haze repeatedly until the text settles
//! - `haze score` - Compare two texts
//! - `haze rules` - Validate a rule file and list its pairs
//! - `haze trace` - Show which rules rewrite a word

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_rehaze, run_rules, run_score, run_trace, run_transform, RehazeArgs, RulesArgs, ScoreArgs,
    TraceArgs, TransformArgs,
};
use output::HazeDiagnostic;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Round-trip text through a bridge language.
#[derive(Debug, Parser)]
#[command(name = "haze")]
#[command(about = "Round-trip text through a bridge language", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Haze text through a bridge language and back
    Transform(TransformArgs),
    /// Haze text repeatedly until consecutive outputs are alike
    Rehaze(RehazeArgs),
    /// Score the similarity of two texts
    Score(ScoreArgs),
    /// Validate a rule file and list the pairs it covers
    Rules(RulesArgs),
    /// Show every rule that rewrites a word, in both directions
    Trace(TraceArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn setup_tracing(verbose: bool) {
    let default_filter = if verbose { "haze=debug" } else { "haze=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(stderr))
        .init();
}

fn main() -> miette::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Transform(args) => run_transform(args),
        Commands::Rehaze(args) => run_rehaze(args),
        Commands::Score(args) => run_score(args),
        Commands::Rules(args) => run_rules(args),
        Commands::Trace(args) => run_trace(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            if e.downcast_ref::<HazeDiagnostic>().is_some() {
                exit(exitcode::DATAERR);
            }
            exit(exitcode::SOFTWARE);
        }
    }
}
