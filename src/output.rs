// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result printing for the CLI: colorized text or JSON.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::matching::{find_ignore_case, normalize_query};
use crate::types::{SearchKind, SearchResult};

/// Print any serializable value as JSON (pretty by default).
pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print the ranked result list with the query highlighted in each title.
pub fn print_results_text(results: &[SearchResult], query: &str) {
    if results.is_empty() {
        println!("No results for '{}'", query.trim());
        return;
    }
    for result in results {
        let tag = kind_tag(result.kind);
        let title = highlight_match(&result.title, query);
        let mut line = format!("{:>8}  {}", tag.cyan(), title);
        if let Some(subtitle) = &result.subtitle {
            line.push_str(&format!("  {}", subtitle.dimmed()));
        }
        if let Some(label) = &result.location_label {
            line.push_str(&format!("  ({})", label.dimmed()));
        }
        println!("{line}");
    }
}

fn kind_tag(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::File => "file",
        SearchKind::Kanban => "kanban",
        SearchKind::Thread => "thread",
        SearchKind::Message => "message",
        SearchKind::History => "history",
        SearchKind::Skill => "skill",
        SearchKind::Command => "command",
    }
}

fn highlight_match(title: &str, query: &str) -> String {
    let Some(needle) = normalize_query(query) else {
        return title.to_string();
    };
    let Some(hit) = find_ignore_case(title, &needle) else {
        return title.to_string();
    };
    let end = hit.byte_pos + matched_len(&title[hit.byte_pos..], &needle);
    format!(
        "{}{}{}",
        &title[..hit.byte_pos],
        title[hit.byte_pos..end].yellow().bold(),
        &title[end..]
    )
}

/// Byte length of the prefix of `text` that matched `needle_lower`
/// case-insensitively.
fn matched_len(text: &str, needle_lower: &str) -> usize {
    let mut needle_chars = needle_lower.chars().count();
    let mut len = 0;
    for (byte, ch) in text.char_indices() {
        if needle_chars == 0 {
            return byte;
        }
        needle_chars = needle_chars.saturating_sub(ch.to_lowercase().count());
        len = byte + ch.len_utf8();
    }
    len
}
