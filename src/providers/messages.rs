// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message provider: flattens a workspace's threads into a message corpus
//! and matches message text, surfacing a bounded snippet per hit.

use std::collections::HashMap;

use crate::indexing::{build_message_index, message_snippet, SNIPPET_RADIUS};
use crate::matching::{find_ignore_case, normalize_query};
use crate::types::{ConversationItem, SearchKind, SearchResult, SourceKind, ThreadSummary};

const PREFIX_SCORE: i64 = 40;
const BASE_SCORE: i64 = 260;

pub fn search_messages(
    query: &str,
    workspace_id: &str,
    threads: &[ThreadSummary],
    items_by_thread: &HashMap<String, Vec<ConversationItem>>,
) -> Vec<SearchResult> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let thread_name_by_id: HashMap<&str, &str> = threads
        .iter()
        .map(|thread| (thread.id.as_str(), thread.name.as_str()))
        .collect();
    let thread_updated_by_id: HashMap<&str, i64> = threads
        .iter()
        .map(|thread| (thread.id.as_str(), thread.updated_at))
        .collect();

    let indexed = build_message_index(
        threads.iter().map(|thread| thread.id.as_str()),
        items_by_thread,
    );

    let mut results = Vec::new();
    for message in indexed {
        let Some(hit) = find_ignore_case(message.text, &needle) else {
            continue;
        };
        let score = if hit.char_pos == 0 {
            PREFIX_SCORE
        } else {
            BASE_SCORE + hit.char_pos as i64
        };
        let thread_name = thread_name_by_id
            .get(message.thread_id)
            .copied()
            .unwrap_or("Thread");
        let mut result = SearchResult::new(
            format!(
                "message:{workspace_id}:{}:{}",
                message.thread_id, message.message_id
            ),
            SearchKind::Message,
            SourceKind::Messages,
            thread_name,
            score,
        );
        result.subtitle = Some(message_snippet(message.text, &needle, SNIPPET_RADIUS));
        result.workspace_id = Some(workspace_id.to_string());
        result.thread_id = Some(message.thread_id.to_string());
        result.message_id = Some(message.message_id.to_string());
        result.location_label = Some(format!("{} / {}", message.thread_id, message.message_id));
        result.updated_at = Some(
            thread_updated_by_id
                .get(message.thread_id)
                .copied()
                .unwrap_or(0),
        );
        results.push(result);
    }
    results
}
