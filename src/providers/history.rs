// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input-history provider: matches previously submitted input text. An
//! importance weight (capped at 20) discounts the score, letting frequently
//! reused entries rise above their band.

use crate::matching::{find_ignore_case, normalize_query};
use crate::types::{HistoryEntry, SearchKind, SearchResult, SourceKind};

const PREFIX_SCORE: i64 = 30;
const BASE_SCORE: i64 = 220;
const MAX_IMPORTANCE_DISCOUNT: i64 = 20;

pub fn search_history(query: &str, history_items: &[HistoryEntry]) -> Vec<SearchResult> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for item in history_items {
        let text = item.text.trim();
        if text.is_empty() {
            continue;
        }
        let Some(hit) = find_ignore_case(text, &needle) else {
            continue;
        };
        let base = if hit.char_pos == 0 {
            PREFIX_SCORE
        } else {
            BASE_SCORE + hit.char_pos as i64
        };
        let score = base - item.importance.min(MAX_IMPORTANCE_DISCOUNT);
        let mut result = SearchResult::new(
            format!("history:{text}"),
            SearchKind::History,
            SourceKind::History,
            text,
            score,
        );
        result.subtitle = Some("Input History".to_string());
        result.history_text = Some(text.to_string());
        result.location_label = Some("input-history".to_string());
        results.push(result);
    }
    results
}
