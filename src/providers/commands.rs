// SPDX-License-Identifier: MIT OR Apache-2.0

//! Custom-command provider: matches the command catalog by name,
//! description or argument hint.

use crate::matching::{find_ignore_case, normalize_query};
use crate::types::{CommandEntry, SearchKind, SearchResult, SourceKind};

const PREFIX_SCORE: i64 = 45;
const BASE_SCORE: i64 = 230;

pub fn search_commands(query: &str, commands: &[CommandEntry]) -> Vec<SearchResult> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for command in commands {
        let name = command.name.trim();
        if name.is_empty() {
            continue;
        }
        let description = command.description.trim();
        let argument_hint = command.argument_hint.trim();
        let search_text = format!("{name} {description} {argument_hint}");
        let Some(hit) = find_ignore_case(&search_text, &needle) else {
            continue;
        };
        let score = if hit.char_pos == 0 {
            PREFIX_SCORE
        } else {
            BASE_SCORE + hit.char_pos as i64
        };

        let subtitle = if !description.is_empty() {
            description.to_string()
        } else if !argument_hint.is_empty() {
            argument_hint.to_string()
        } else {
            "Command".to_string()
        };
        let mut result = SearchResult::new(
            format!("command:{name}"),
            SearchKind::Command,
            SourceKind::Commands,
            format!("/{name}"),
            score,
        );
        result.subtitle = Some(subtitle);
        result.command_name = Some(name.to_string());
        result.location_label = Some(if command.path.is_empty() {
            name.to_string()
        } else {
            command.path.clone()
        });
        results.push(result);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: &str, description: &str, argument_hint: &str) -> CommandEntry {
        CommandEntry {
            name: name.to_string(),
            path: format!("/commands/{name}"),
            description: description.to_string(),
            argument_hint: argument_hint.to_string(),
        }
    }

    #[test]
    fn blank_query_returns_nothing() {
        assert!(search_commands("", &[command("plan", "", "")]).is_empty());
    }

    #[test]
    fn matches_name_description_and_argument_hint() {
        let commands = [command("plan", "Command plan", "<topic>")];
        assert_eq!(search_commands("plan", &commands)[0].score, 45);
        assert!(!search_commands("topic", &commands).is_empty());
    }

    #[test]
    fn subtitle_prefers_description_over_hint() {
        let with_both = search_commands("deploy", &[command("deploy", "Ship it", "<env>")]);
        assert_eq!(with_both[0].subtitle.as_deref(), Some("Ship it"));
        let hint_only = search_commands("deploy", &[command("deploy", "", "<env>")]);
        assert_eq!(hint_only[0].subtitle.as_deref(), Some("<env>"));
        let bare = search_commands("deploy", &[command("deploy", "", "")]);
        assert_eq!(bare[0].subtitle.as_deref(), Some("Command"));
    }

    #[test]
    fn nameless_entries_are_skipped() {
        assert!(search_commands("x", &[command("  ", "x marks", "")]).is_empty());
    }
}
