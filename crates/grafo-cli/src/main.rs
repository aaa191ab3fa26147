//! Grafo CLI - structural analysis of undirected weighted graphs.
//!
//! Loads a graph in the line-oriented text format and prints its
//! components, cut sets and diameters.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Grafo graph analysis tool.
///
/// Every command takes the path of a graph description; `-` reads standard
/// input.
#[derive(Parser)]
#[command(name = "grafo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress output and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Defer analysis until a command asks for it
    #[arg(long, global = true)]
    lazy: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Display graph information (name, counts, components, bipartiteness)
    Info {
        /// Path to the graph description
        path: PathBuf,
    },

    /// List articulation points and bridges
    Cuts {
        /// Path to the graph description
        path: PathBuf,
    },

    /// Show the diameter of every component
    Diameters {
        /// Path to the graph description
        path: PathBuf,
    },

    /// Print every analysis result
    Report {
        /// Path to the graph description
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let options = commands::Options {
        format: cli.format.into(),
        quiet: cli.quiet,
        lazy: cli.lazy,
    };

    let result = match cli.command {
        Commands::Info { path } => commands::info::run(&path, options),
        Commands::Cuts { path } => commands::cuts::run(&path, options),
        Commands::Diameters { path } => commands::diameters::run(&path, options),
        Commands::Report { path } => commands::report::run(&path, options),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
