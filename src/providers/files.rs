// SPDX-License-Identifier: MIT OR Apache-2.0

//! File path provider: matches against a workspace's relative file paths.

use crate::matching::{find_ignore_case, normalize_query};
use crate::types::{SearchKind, SearchResult, SourceKind};

const PREFIX_SCORE: i64 = 20;
const BASE_SCORE: i64 = 200;

pub fn search_files(query: &str, files: &[String], workspace_id: &str) -> Vec<SearchResult> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for path in files {
        let Some(hit) = find_ignore_case(path, &needle) else {
            continue;
        };
        let score = if hit.char_pos == 0 {
            PREFIX_SCORE
        } else {
            BASE_SCORE + hit.char_pos as i64
        };
        let mut result = SearchResult::new(
            format!("file:{workspace_id}:{path}"),
            SearchKind::File,
            SourceKind::Files,
            path.clone(),
            score,
        );
        result.subtitle = Some("File".to_string());
        result.workspace_id = Some(workspace_id.to_string());
        result.file_path = Some(path.clone());
        result.location_label = Some(path.clone());
        results.push(result);
    }
    results
}
