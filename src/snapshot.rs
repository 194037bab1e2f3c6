// SPDX-License-Identifier: MIT OR Apache-2.0

//! Corpus snapshot: the full collaborator dataset bundled into one
//! serde-deserializable value, so the CLI and tests can drive the engine
//! from a JSON file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::SnapshotError;
use crate::types::{
    CommandEntry, ConversationItem, HistoryEntry, KanbanTask, SkillEntry, WorkspaceSource,
};

/// Point-in-time copy of every searchable corpus. Missing sections
/// deserialize as empty rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusSnapshot {
    pub workspaces: Vec<WorkspaceSource>,
    pub kanban_tasks: Vec<KanbanTask>,
    pub thread_items: HashMap<String, Vec<ConversationItem>>,
    pub history: Vec<HistoryEntry>,
    pub skills: Vec<SkillEntry>,
    pub commands: Vec<CommandEntry>,
    pub active_workspace_id: Option<String>,
}

impl CorpusSnapshot {
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn workspace(&self, workspace_id: &str) -> Option<&WorkspaceSource> {
        self.workspaces
            .iter()
            .find(|workspace| workspace.workspace_id == workspace_id)
    }

    /// The workspace the caller considers active: the configured one if it
    /// exists, otherwise the first listed.
    pub fn active_workspace(&self) -> Option<&WorkspaceSource> {
        self.active_workspace_id
            .as_deref()
            .and_then(|id| self.workspace(id))
            .or_else(|| self.workspaces.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_sections_default_to_empty() {
        let snapshot: CorpusSnapshot =
            serde_json::from_str(r#"{"workspaces": []}"#).expect("parse");
        assert!(snapshot.kanban_tasks.is_empty());
        assert!(snapshot.history.is_empty());
        assert!(snapshot.active_workspace_id.is_none());
    }

    #[test]
    fn unknown_conversation_item_kinds_are_tolerated() {
        let snapshot: CorpusSnapshot = serde_json::from_str(
            r#"{
                "thread_items": {
                    "t-1": [
                        {"kind": "message", "id": "m1", "role": "user", "text": "hi"},
                        {"kind": "reasoning", "id": "r1", "summary": "s"}
                    ]
                }
            }"#,
        )
        .expect("parse");
        let items = &snapshot.thread_items["t-1"];
        assert_eq!(items.len(), 2);
        assert!(matches!(items[1], ConversationItem::Other));
    }

    #[test]
    fn load_reports_read_and_parse_failures() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("missing.json");
        assert!(CorpusSnapshot::load(&missing).is_err());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{").expect("write");
        assert!(CorpusSnapshot::load(&broken).is_err());
    }

    #[test]
    fn active_workspace_falls_back_to_the_first() {
        let mut snapshot = CorpusSnapshot::default();
        snapshot.workspaces.push(WorkspaceSource {
            workspace_id: "w-1".to_string(),
            workspace_name: "One".to_string(),
            ..Default::default()
        });
        assert_eq!(
            snapshot.active_workspace().map(|w| w.workspace_id.as_str()),
            Some("w-1")
        );

        snapshot.active_workspace_id = Some("w-missing".to_string());
        assert_eq!(
            snapshot.active_workspace().map(|w| w.workspace_id.as_str()),
            Some("w-1")
        );
    }
}
