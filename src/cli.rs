// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use unisearch::types::ContentFilter;

/// unisearch - Unified multi-source workspace search
///
/// Searches files, kanban tasks, threads, messages, input history, skills
/// and custom commands from a corpus snapshot and prints one ranked list.
#[derive(Parser, Debug)]
#[command(name = "unisearch")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Quickstart:\n  unisearch search \"token refresh\" --snapshot corpus.json\n  unisearch search alpha --snapshot corpus.json --global --filter files,threads\n  unisearch open \"file:w-1:src/main.rs\""
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Content filter selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliContentFilter {
    All,
    Files,
    Kanban,
    Threads,
    Messages,
    History,
    Skills,
    Commands,
}

impl From<CliContentFilter> for ContentFilter {
    fn from(filter: CliContentFilter) -> Self {
        match filter {
            CliContentFilter::All => ContentFilter::All,
            CliContentFilter::Files => ContentFilter::Files,
            CliContentFilter::Kanban => ContentFilter::Kanban,
            CliContentFilter::Threads => ContentFilter::Threads,
            CliContentFilter::Messages => ContentFilter::Messages,
            CliContentFilter::History => ContentFilter::History,
            CliContentFilter::Skills => ContentFilter::Skills,
            CliContentFilter::Commands => ContentFilter::Commands,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the corpus snapshot
    #[command(visible_alias = "s")]
    Search {
        /// Free-text query
        query: String,

        /// Path to the corpus snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,

        /// Search every workspace instead of only the active one
        #[arg(long)]
        global: bool,

        /// Active workspace id (defaults to the snapshot's)
        #[arg(long)]
        workspace: Option<String>,

        /// Restrict to source categories (comma separated)
        #[arg(long = "filter", value_delimiter = ',')]
        filters: Vec<CliContentFilter>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,

        /// Report timing metrics via tracing
        #[arg(long)]
        metrics: bool,

        /// Recency store location override
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Record that a search result was opened
    Open {
        /// Result id as printed by `search --format json`
        result_id: String,

        /// Recency store location override
        #[arg(long)]
        store: Option<PathBuf>,
    },
}
