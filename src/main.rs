// SPDX-License-Identifier: MIT OR Apache-2.0

//! unisearch - Unified multi-source workspace search tool
//!
//! Loads a corpus snapshot, fans the query out across per-source providers
//! and prints one ranked, capped result list.

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, CliContentFilter, Commands, OutputFormat};
use unisearch::config::{Config, ConfigOutputFormat};
use unisearch::filters::{all_filters, FilterSet};
use unisearch::output::{print_json, print_results_text};
use unisearch::recency::{default_store_path, RecencyStore};
use unisearch::search::{run_search, SearchParams};
use unisearch::snapshot::CorpusSnapshot;
use unisearch::types::ContentFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load();
    let format = resolve_format(cli.format, &config);

    match cli.command {
        Commands::Search {
            query,
            snapshot,
            global,
            workspace,
            filters,
            limit,
            metrics,
            store,
        } => {
            let snapshot = CorpusSnapshot::load(&snapshot)?;
            let store = RecencyStore::load(&store_path(store, &config));

            let active_workspace_id = workspace
                .or_else(|| snapshot.active_workspace_id.clone())
                .or_else(|| {
                    snapshot
                        .workspaces
                        .first()
                        .map(|w| w.workspace_id.clone())
                })
                .unwrap_or_default();

            let scoped: Vec<_>;
            let workspace_sources = if global {
                &snapshot.workspaces[..]
            } else {
                scoped = snapshot
                    .workspaces
                    .iter()
                    .filter(|w| w.workspace_id == active_workspace_id)
                    .cloned()
                    .collect();
                &scoped[..]
            };

            let content_filters = filter_set(&filters);
            let mut results = run_search(&SearchParams {
                query: &query,
                content_filters: &content_filters,
                workspace_sources,
                kanban_tasks: &snapshot.kanban_tasks,
                thread_items: &snapshot.thread_items,
                history_items: &snapshot.history,
                skills: &snapshot.skills,
                commands: &snapshot.commands,
                active_workspace_id: &active_workspace_id,
                recency: store.map(),
                report_metrics: metrics,
            });
            results.truncate(config.merge_max_results(limit));

            match format {
                OutputFormat::Json => print_json(&results, cli.compact)?,
                OutputFormat::Text => print_results_text(&results, &query),
            }
        }
        Commands::Open { result_id, store } => {
            let mut store = RecencyStore::load(&store_path(store, &config));
            store.record_open(&result_id);
            store.flush()?;
        }
    }

    Ok(())
}

fn resolve_format(cli_format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    cli_format.unwrap_or_else(|| match config.output_format() {
        Some(ConfigOutputFormat::Json) => OutputFormat::Json,
        _ => OutputFormat::Text,
    })
}

fn store_path(cli_store: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_store
        .or_else(|| config.recency_store.clone())
        .unwrap_or_else(default_store_path)
}

fn filter_set(filters: &[CliContentFilter]) -> FilterSet {
    if filters.is_empty() {
        return all_filters();
    }
    let set: FilterSet = filters.iter().map(|f| ContentFilter::from(*f)).collect();
    if set.contains(&ContentFilter::All) {
        all_filters()
    } else {
        set
    }
}
