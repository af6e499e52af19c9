// Rust guideline compliant 2026-10-16

//! Scholar CLI Application
//!
//! Command-line queries over a research catalog held in memory.

use anyhow::{Context, Result};
use clap::Parser;
use scholar_cli::{commands, create_formatter, Library};
use scholar_core::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt;

#[derive(Parser, Debug)]
#[command(
    name = "scholar",
    version,
    about = "Scholar: in-memory research metadata toolkit",
    long_about = "Scholar loads publications, citations, and datasets from a JSON catalog document and answers lookup, search, and citation graph queries.",
    after_help = "Examples:\n  scholar --catalog catalog.json search transformers\n  scholar impact --limit 10\n  scholar chain pub-a1b2c3d4e5 pub-f6a7b8c9d0 --max-depth 3\n  scholar --json datasets --tag nlp\n"
)]
struct Cli {
    /// Catalog document to load
    #[arg(long, global = true, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Directory containing scholar.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Show a publication
    Show {
        /// Publication ID
        id: String,
    },

    /// Search publications by keyword
    Search {
        /// Term matched against title, abstract, and keywords
        term: String,
    },

    /// List publications by author
    Author {
        /// Author name (case-insensitive substring)
        name: String,
    },

    /// Count publications per venue
    Venues,

    /// List publications cited by a publication
    Refs {
        /// Publication ID
        id: String,
    },

    /// List publications citing a publication
    Citers {
        /// Publication ID
        id: String,
    },

    /// Rank publications by citation count
    Impact {
        /// Show only the top N entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Find the shortest citation chain between two publications
    Chain {
        /// Starting publication ID
        start: String,

        /// Target publication ID
        end: String,

        /// Maximum chain length to search (defaults to config max_chain_depth)
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// List datasets
    Datasets {
        /// Only datasets carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Export the dataset catalog as JSON
    Export,

    /// Show record counts
    Stats,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(&cli.log_level) {
        eprintln!("Error: {:#}", err);
        std::process::exit(2);
    }

    let error_format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    if let Err(err) = run(cli) {
        let formatter = create_formatter(error_format);
        eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = cli.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = Config::load(&config_dir)
        .with_context(|| format!("Failed to load config from {}", config_dir.display()))?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output_format
    };
    let formatter = create_formatter(format);

    let library = Library::load(&cli.catalog, &config)?;

    let output = match cli.command {
        Commands::Show { id } => commands::publications::show(&library, &id, formatter.as_ref()),
        Commands::Search { term } => {
            commands::publications::search(&library, &term, formatter.as_ref())
        }
        Commands::Author { name } => {
            commands::publications::author(&library, &name, formatter.as_ref())
        }
        Commands::Venues => commands::publications::venues(&library, formatter.as_ref()),
        Commands::Refs { id } => commands::citations::references(&library, &id, formatter.as_ref()),
        Commands::Citers { id } => commands::citations::citers(&library, &id, formatter.as_ref()),
        Commands::Impact { limit } => {
            commands::citations::impact(&library, limit, formatter.as_ref())
        }
        Commands::Chain {
            start,
            end,
            max_depth,
        } => commands::citations::chain(
            &library,
            &start,
            &end,
            max_depth.unwrap_or(config.max_chain_depth),
            formatter.as_ref(),
        ),
        Commands::Datasets { tag } => {
            commands::datasets::list(&library, tag.as_deref(), formatter.as_ref())
        }
        Commands::Export => commands::datasets::export(&library),
        Commands::Stats => commands::datasets::stats(&library, formatter.as_ref()),
    }?;

    println!("{}", output);
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Unknown log level: {}", other),
    }
}
