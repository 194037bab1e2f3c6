// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message indexing: flattens per-thread conversation logs into a flat
//! searchable corpus and produces bounded context snippets.
//!
//! The index is ephemeral; it is rebuilt on every search call.

use std::collections::HashMap;

use crate::matching::find_ignore_case;
use crate::types::ConversationItem;

/// Characters kept on each side of a snippet hit.
pub const SNIPPET_RADIUS: usize = 36;

/// Maximum snippet length when the query does not occur in the text.
pub const SNIPPET_HEAD_CHARS: usize = 96;

/// A searchable message, flattened out of its thread. Borrows from the
/// conversation store snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedMessage<'a> {
    pub message_id: &'a str,
    pub thread_id: &'a str,
    pub text: &'a str,
}

/// Flatten the given threads' conversation items into a message corpus.
///
/// Only plain message items with non-blank text are kept; thread order and
/// per-thread item order are preserved.
pub fn build_message_index<'a>(
    thread_ids: impl IntoIterator<Item = &'a str>,
    items_by_thread: &'a HashMap<String, Vec<ConversationItem>>,
) -> Vec<IndexedMessage<'a>> {
    let mut indexed = Vec::new();
    for thread_id in thread_ids {
        let Some(items) = items_by_thread.get(thread_id) else {
            continue;
        };
        for item in items {
            let ConversationItem::Message { id, text, .. } = item else {
                continue;
            };
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            indexed.push(IndexedMessage {
                message_id: id.as_str(),
                thread_id,
                text,
            });
        }
    }
    indexed
}

/// A bounded excerpt of `text` around the first case-insensitive hit of
/// `query`, with `...` affixes where the excerpt is cut. Without a hit (or
/// with a blank query) the first [`SNIPPET_HEAD_CHARS`] characters are
/// returned unmodified.
pub fn message_snippet(text: &str, query: &str, radius: usize) -> String {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return head_chars(text, SNIPPET_HEAD_CHARS);
    }
    let Some(hit) = find_ignore_case(text, &needle) else {
        return head_chars(text, SNIPPET_HEAD_CHARS);
    };

    let boundaries: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
    let total_chars = boundaries.len();
    let needle_chars = needle.chars().count();

    let start = hit.char_pos.saturating_sub(radius);
    let end = (hit.char_pos + needle_chars + radius).min(total_chars);
    let byte_start = boundaries[start];
    let byte_end = if end == total_chars {
        text.len()
    } else {
        boundaries[end]
    };

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(&text[byte_start..byte_end]);
    if end < total_chars {
        snippet.push_str("...");
    }
    snippet
}

fn head_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte, _)) => text[..byte].to_string(),
        None => text.to_string(),
    }
}
