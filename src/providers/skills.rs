// SPDX-License-Identifier: MIT OR Apache-2.0

//! Skill provider: matches the skill catalog by name or description.

use crate::matching::{find_ignore_case, normalize_query};
use crate::types::{SearchKind, SearchResult, SkillEntry, SourceKind};

const PREFIX_SCORE: i64 = 35;
const BASE_SCORE: i64 = 210;

pub fn search_skills(
    query: &str,
    skills: &[SkillEntry],
    workspace_id: Option<&str>,
) -> Vec<SearchResult> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let mut results = Vec::new();
    for skill in skills {
        let name = skill.name.trim();
        if name.is_empty() {
            continue;
        }
        let description = skill.description.trim();
        let search_text = format!("{name} {description}");
        let Some(hit) = find_ignore_case(&search_text, &needle) else {
            continue;
        };
        let score = if hit.char_pos == 0 {
            PREFIX_SCORE
        } else {
            BASE_SCORE + hit.char_pos as i64
        };
        let mut result = SearchResult::new(
            format!("skill:{}:{name}", workspace_id.unwrap_or("active")),
            SearchKind::Skill,
            SourceKind::Skills,
            format!("/{name}"),
            score,
        );
        result.subtitle = Some(if description.is_empty() {
            "Skill".to_string()
        } else {
            description.to_string()
        });
        result.workspace_id = workspace_id.map(str::to_string);
        result.skill_name = Some(name.to_string());
        result.location_label = Some(if skill.path.is_empty() {
            name.to_string()
        } else {
            skill.path.clone()
        });
        results.push(result);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, description: &str) -> SkillEntry {
        SkillEntry {
            name: name.to_string(),
            path: format!("/skills/{name}"),
            description: description.to_string(),
        }
    }

    #[test]
    fn blank_query_returns_nothing() {
        assert!(search_skills("  ", &[skill("plan-writer", "")], None).is_empty());
    }

    #[test]
    fn matches_name_or_description() {
        let skills = [skill("plan-writer", "Plan helper")];
        assert_eq!(search_skills("plan", &skills, Some("w-1"))[0].score, 35);
        let by_description = search_skills("helper", &skills, Some("w-1"));
        assert_eq!(by_description[0].score, 210 + 17);
    }

    #[test]
    fn identity_includes_workspace_scope() {
        let skills = [skill("review", "")];
        assert_eq!(
            search_skills("review", &skills, Some("w-2"))[0].id,
            "skill:w-2:review"
        );
        assert_eq!(
            search_skills("review", &skills, None)[0].id,
            "skill:active:review"
        );
    }

    #[test]
    fn title_is_slash_prefixed() {
        let results = search_skills("review", &[skill("review", "")], None);
        assert_eq!(results[0].title, "/review");
        assert_eq!(results[0].skill_name.as_deref(), Some("review"));
    }
}
