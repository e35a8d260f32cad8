//! Command line argument parsing for the sarissa-lite CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::{IndexConfig, MatchMode};
use crate::storage::MergeDialect;

/// sarissa-lite - a posting-list index stored in SQLite
#[derive(Parser, Debug, Clone)]
#[command(name = "sarissa-lite")]
#[command(about = "An inverted index whose posting lists live in a SQL table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LiteArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LiteArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the posting table if it does not exist
    Init(InitArgs),

    /// Index documents from a JSON Lines file
    Index(IndexArgs),

    /// Search one field for analyzed text
    Search(SearchArgs),

    /// Run a JSON query expression
    Query(QueryArgs),

    /// Show the terms of a field, or the terms a text looks up
    Terms(TermsArgs),

    /// Drop every posting
    Truncate(TruncateArgs),

    /// Show index statistics
    Stats(StatsArgs),
}

/// Options shared by every command that opens an index.
#[derive(Args, Debug, Clone)]
pub struct IndexOptions {
    /// Path to the SQLite database file
    #[arg(value_name = "DATABASE")]
    pub database: PathBuf,

    /// Index configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Posting table name (overrides the config file)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Merge statement dialect: sqlite or mysql (overrides the config file)
    #[arg(long)]
    pub dialect: Option<MergeDialect>,

    /// Document count used for scoring (overrides the config file)
    #[arg(long)]
    pub total_docs: Option<usize>,
}

impl IndexOptions {
    /// The effective index configuration: the config file, then flags.
    pub fn index_config(&self) -> Result<IndexConfig> {
        let mut config = match &self.config {
            Some(path) => IndexConfig::from_file(path)?,
            None => IndexConfig::default(),
        };
        if let Some(table) = &self.table {
            config.table_name = table.clone();
        }
        if let Some(dialect) = self.dialect {
            config.dialect = dialect;
        }
        if let Some(total_docs) = self.total_docs {
            config.initial_total_docs = total_docs;
        }
        Ok(config)
    }
}

/// Arguments for creating the table
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    #[command(flatten)]
    pub index: IndexOptions,
}

/// Arguments for indexing documents
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    #[command(flatten)]
    pub index: IndexOptions,

    /// Document file, one `{"id": .., "fields": {..}}` object per line
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,

    /// Documents per transaction
    #[arg(short, long, default_value = "1000")]
    pub batch_size: usize,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub index: IndexOptions,

    /// Field to search in
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Text to analyze into search terms
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// How the terms are combined: and, or
    #[arg(short, long, default_value = "or")]
    pub mode: MatchMode,

    /// Maximum number of results to return
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for running a query expression
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub index: IndexOptions,

    /// Query expression file (JSON)
    #[arg(value_name = "QUERY_FILE")]
    pub query_file: PathBuf,

    /// Maximum number of results to return
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for listing terms
#[derive(Parser, Debug, Clone)]
pub struct TermsArgs {
    #[command(flatten)]
    pub index: IndexOptions,

    /// Field whose terms are shown
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Text to analyze; without it every stored term of the field is listed
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for truncating the index
#[derive(Parser, Debug, Clone)]
pub struct TruncateArgs {
    #[command(flatten)]
    pub index: IndexOptions,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub index: IndexOptions,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
