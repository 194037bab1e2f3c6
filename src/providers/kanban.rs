// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kanban provider: matches task title or description. Title hits rank in
//! the highest band of any provider; description-only hits rank below every
//! other provider's offset band.

use crate::matching::{find_ignore_case, normalize_query};
use crate::types::{KanbanTask, SearchKind, SearchResult, SourceKind};

const TITLE_PREFIX_SCORE: i64 = 10;
const TITLE_BASE_SCORE: i64 = 100;
const DESCRIPTION_BASE_SCORE: i64 = 300;

pub fn search_kanban_tasks<'a>(
    query: &str,
    tasks: impl IntoIterator<Item = &'a KanbanTask>,
) -> Vec<SearchResult> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for task in tasks {
        let title = task.title.trim();
        let description = task.description.trim();
        let title_hit = find_ignore_case(title, &needle);
        let description_hit = find_ignore_case(description, &needle);
        let score = match (title_hit, description_hit) {
            (Some(hit), _) if hit.char_pos == 0 => TITLE_PREFIX_SCORE,
            (Some(hit), _) => TITLE_BASE_SCORE + hit.char_pos as i64,
            (None, Some(hit)) => DESCRIPTION_BASE_SCORE + hit.char_pos as i64,
            (None, None) => continue,
        };

        let display_title = if title.is_empty() {
            "(untitled task)"
        } else {
            title
        };
        let mut result = SearchResult::new(
            format!("kanban:{}", task.id),
            SearchKind::Kanban,
            SourceKind::Kanban,
            display_title,
            score,
        );
        result.subtitle = Some(if description.is_empty() {
            "Kanban Task".to_string()
        } else {
            description.to_string()
        });
        result.workspace_id = Some(task.workspace_id.clone());
        result.panel_id = Some(task.panel_id.clone());
        result.task_id = Some(task.id.clone());
        result.location_label = Some(if task.panel_id.is_empty() {
            task.id.clone()
        } else {
            task.panel_id.clone()
        });
        results.push(result);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str, description: &str) -> KanbanTask {
        KanbanTask {
            id: id.to_string(),
            workspace_id: "w-1".to_string(),
            panel_id: "panel-todo".to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn blank_query_returns_nothing() {
        let tasks = [task("t1", "Ship release", "")];
        assert!(search_kanban_tasks("", tasks.iter()).is_empty());
    }

    #[test]
    fn title_hits_use_the_title_bands() {
        let tasks = [
            task("t1", "release notes", ""),
            task("t2", "draft release", ""),
        ];
        let results = search_kanban_tasks("release", tasks.iter());
        assert_eq!(results[0].score, 10);
        assert_eq!(results[1].score, 100 + 6);
    }

    #[test]
    fn description_only_hits_rank_in_the_lowest_band() {
        let tasks = [task("t1", "Cleanup", "refactor the release pipeline")];
        let results = search_kanban_tasks("release", tasks.iter());
        assert_eq!(results[0].score, 300 + 13);
    }

    #[test]
    fn untitled_tasks_get_a_placeholder_title() {
        let tasks = [task("t1", "  ", "mentions alpha")];
        let results = search_kanban_tasks("alpha", tasks.iter());
        assert_eq!(results[0].title, "(untitled task)");
        assert_eq!(results[0].id, "kanban:t1");
        assert_eq!(results[0].panel_id.as_deref(), Some("panel-todo"));
    }
}
