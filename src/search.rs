// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregator: fans a query out across providers and workspace scopes,
//! caps and ranks the combined results.
//!
//! Every call is a fresh, synchronous, stateless scan over the supplied
//! snapshot; for fixed inputs the output ordering is fully deterministic.

use std::collections::HashMap;
use std::time::Instant;

use crate::filters::{enabled_sources, FilterSet};
use crate::limits::{ProviderLimits, SEARCH_TOTAL_LIMIT};
use crate::metrics::{report_search_metrics, SearchMetrics};
use crate::providers;
use crate::ranking::{compare_results, now_ms};
use crate::recency::RecencyMap;
use crate::types::{
    CommandEntry, ConversationItem, HistoryEntry, KanbanTask, SearchResult, SkillEntry,
    SourceKind, WorkspaceSource,
};

/// One search invocation's inputs. Scope is expressed purely through
/// `workspace_sources`: pass the single active workspace or all of them.
#[derive(Debug)]
pub struct SearchParams<'a> {
    pub query: &'a str,
    pub content_filters: &'a FilterSet,
    pub workspace_sources: &'a [WorkspaceSource],
    pub kanban_tasks: &'a [KanbanTask],
    pub thread_items: &'a HashMap<String, Vec<ConversationItem>>,
    pub history_items: &'a [HistoryEntry],
    pub skills: &'a [SkillEntry],
    pub commands: &'a [CommandEntry],
    pub active_workspace_id: &'a str,
    pub recency: &'a RecencyMap,
    pub report_metrics: bool,
}

/// Run the full pipeline: per-workspace providers, singleton providers,
/// per-provider caps (in emission order), global sort, global cap.
pub fn run_search(params: &SearchParams<'_>) -> Vec<SearchResult> {
    let started = Instant::now();
    let limits = ProviderLimits::default();
    let enabled = enabled_sources(params.content_filters);
    // One captured instant keeps the recency bonus stable across the sort.
    let now = now_ms();

    let mut combined: Vec<SearchResult> = Vec::new();

    for source in params.workspace_sources {
        if enabled.contains(&SourceKind::Files) {
            let hits = providers::search_files(params.query, &source.files, &source.workspace_id);
            extend_capped(&mut combined, hits, limits.files, source);
        }
        if enabled.contains(&SourceKind::Kanban) {
            let tasks = params
                .kanban_tasks
                .iter()
                .filter(|task| task.workspace_id == source.workspace_id);
            let hits = providers::search_kanban_tasks(params.query, tasks);
            extend_capped(&mut combined, hits, limits.kanban, source);
        }
        if enabled.contains(&SourceKind::Threads) {
            let hits =
                providers::search_threads(params.query, &source.threads, &source.workspace_id);
            extend_capped(&mut combined, hits, limits.threads, source);
        }
        if enabled.contains(&SourceKind::Messages) {
            let hits = providers::search_messages(
                params.query,
                &source.workspace_id,
                &source.threads,
                params.thread_items,
            );
            extend_capped(&mut combined, hits, limits.messages, source);
        }
    }

    if enabled.contains(&SourceKind::History) {
        let mut hits = providers::search_history(params.query, params.history_items);
        hits.truncate(limits.history);
        combined.append(&mut hits);
    }
    if enabled.contains(&SourceKind::Skills) {
        let mut hits = providers::search_skills(
            params.query,
            params.skills,
            Some(params.active_workspace_id).filter(|id| !id.is_empty()),
        );
        hits.truncate(limits.skills);
        combined.append(&mut hits);
    }
    if enabled.contains(&SourceKind::Commands) {
        let mut hits = providers::search_commands(params.query, params.commands);
        hits.truncate(limits.commands);
        combined.append(&mut hits);
    }

    combined.sort_by(|a, b| compare_results(a, b, params.recency, now));
    combined.truncate(SEARCH_TOTAL_LIMIT);

    if params.report_metrics {
        report_search_metrics(&SearchMetrics {
            query: params.query,
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
            result_count: combined.len(),
        });
    }

    combined
}

/// Cap a provider's raw output at its limit, keeping emission order, and
/// tag results with the workspace display name.
fn extend_capped(
    combined: &mut Vec<SearchResult>,
    mut hits: Vec<SearchResult>,
    limit: usize,
    source: &WorkspaceSource,
) {
    hits.truncate(limit);
    for hit in &mut hits {
        if hit.workspace_name.is_none() && !source.workspace_name.is_empty() {
            hit.workspace_name = Some(source.workspace_name.clone());
        }
    }
    combined.append(&mut hits);
}
