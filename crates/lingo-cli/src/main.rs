//! Lingo CLI entry point.
//!
//! Provides command-line tools for working with XML translation files:
//! - `lingo translate` - Resolve keys the way an application would
//! - `lingo coverage` - Compare languages against a source language
//! - `lingo check` - Validate translation file syntax

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_translate, CheckArgs, CoverageArgs, TranslateArgs,
};
use tracing_subscriber::EnvFilter;

/// Lingo translation file tools.
#[derive(Debug, Parser)]
#[command(name = "lingo")]
#[command(about = "Lingo translation file tools", long_about = None)]
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
    /// Resolve translation keys
    Translate(TranslateArgs),
    /// Report translation coverage across languages
    Coverage(CoverageArgs),
    /// Check translation file syntax
    Check(CheckArgs),
}

impl ColorWhen {
    /// The forced color setting, or `None` to let owo-colors detect the
    /// terminal (TTY, `NO_COLOR`, `FORCE_COLOR`).
    fn forced(self) -> Option<bool> {
        match self {
            ColorWhen::Auto => None,
            ColorWhen::Always => Some(true),
            ColorWhen::Never => Some(false),
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_filter = if verbose { "lingo=debug,lingo_cli=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    if let Some(enabled) = cli.color.forced() {
        owo_colors::set_override(enabled);
    }
    setup_tracing(cli.verbose);

    let color = cli.color.forced();
    miette::set_hook(Box::new(move |_| {
        let mut opts = miette::MietteHandlerOpts::new().context_lines(2).unicode(true);
        if let Some(enabled) = color {
            opts = opts.color(enabled);
        }
        Box::new(opts.build())
    }))?;

    let result = match cli.command {
        Commands::Translate(args) => run_translate(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Check(args) => run_check(args),
    };

    let code = result.unwrap_or_else(|report| {
        eprintln!("{:?}", report);
        exitcode::SOFTWARE
    });
    exit(code)
}
