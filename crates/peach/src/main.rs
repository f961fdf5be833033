//! Peach CLI - multi-language documentation TOC.
//!
//! Provides commands for:
//! - `toc`: Print the table of contents
//! - `show`: Print a rendered document
//! - `search`: Search documents
//! - `pages`: List standalone pages
//! - `check`: Load all documents and report problems

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GlobalArgs, PagesArgs, SearchArgs, ShowArgs, TocArgs};
use output::Output;

/// Peach - multi-language documentation TOC.
#[derive(Parser)]
#[command(name = "peach", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the table of contents.
    Toc(TocArgs),
    /// Print a rendered document.
    Show(ShowArgs),
    /// Search documents.
    Search(SearchArgs),
    /// List standalone pages.
    Pages(PagesArgs),
    /// Load all documents and report counts.
    Check,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Toc(args) => args.execute(&cli.global),
        Commands::Show(args) => args.execute(&cli.global),
        Commands::Search(args) => args.execute(&cli.global),
        Commands::Pages(args) => args.execute(&cli.global),
        Commands::Check => commands::check::execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
