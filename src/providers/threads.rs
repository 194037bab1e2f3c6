// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thread provider: matches conversation thread names.

use crate::matching::{find_ignore_case, normalize_query};
use crate::types::{SearchKind, SearchResult, SourceKind, ThreadSummary};

const PREFIX_SCORE: i64 = 15;
const BASE_SCORE: i64 = 160;

pub fn search_threads(
    query: &str,
    threads: &[ThreadSummary],
    workspace_id: &str,
) -> Vec<SearchResult> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for thread in threads {
        let Some(hit) = find_ignore_case(&thread.name, &needle) else {
            continue;
        };
        let score = if hit.char_pos == 0 {
            PREFIX_SCORE
        } else {
            BASE_SCORE + hit.char_pos as i64
        };
        let mut result = SearchResult::new(
            format!("thread:{workspace_id}:{}", thread.id),
            SearchKind::Thread,
            SourceKind::Threads,
            thread.name.clone(),
            score,
        );
        result.subtitle = Some("Thread".to_string());
        result.workspace_id = Some(workspace_id.to_string());
        result.thread_id = Some(thread.id.clone());
        result.location_label = Some(thread.id.clone());
        result.updated_at = Some(thread.updated_at);
        results.push(result);
    }
    results
}
