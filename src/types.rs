// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core data model shared by providers, ranking and the aggregator.

use serde::{Deserialize, Serialize};

/// Concrete entity class behind a search result. Closed set, no subclassing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    File,
    Kanban,
    Thread,
    Message,
    History,
    Skill,
    Command,
}

/// Coarse source category used by the content-filter state machine.
///
/// Kept as its own enum rather than derived from [`SearchKind`]: a future
/// kind could map onto a shared source category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Files,
    Kanban,
    Threads,
    Messages,
    History,
    Skills,
    Commands,
}

impl SourceKind {
    pub const ALL: [SourceKind; 7] = [
        SourceKind::Files,
        SourceKind::Kanban,
        SourceKind::Threads,
        SourceKind::Messages,
        SourceKind::History,
        SourceKind::Skills,
        SourceKind::Commands,
    ];
}

/// User-selectable filter restricting which providers run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFilter {
    All,
    Files,
    Kanban,
    Threads,
    Messages,
    History,
    Skills,
    Commands,
}

impl ContentFilter {
    /// The source category a concrete filter selects; `All` selects none
    /// in particular (it stands for every category).
    pub fn source(self) -> Option<SourceKind> {
        match self {
            ContentFilter::All => None,
            ContentFilter::Files => Some(SourceKind::Files),
            ContentFilter::Kanban => Some(SourceKind::Kanban),
            ContentFilter::Threads => Some(SourceKind::Threads),
            ContentFilter::Messages => Some(SourceKind::Messages),
            ContentFilter::History => Some(SourceKind::History),
            ContentFilter::Skills => Some(SourceKind::Skills),
            ContentFilter::Commands => Some(SourceKind::Commands),
        }
    }
}

/// One matched entity surfaced to the user.
///
/// `id` is stable across repeated searches for the same underlying entity;
/// it is the join key into the recency store. `score` is a rank, not a
/// probability: lower is better.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub kind: SearchKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub score: i64,
    pub source_kind: SourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_name: Option<String>,
    /// Human-readable pointer to the result's origin. Presentation only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_label: Option<String>,
    /// Epoch-ms recency signal from the underlying entity, where one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl SearchResult {
    /// A result with the required fields set and every provenance field
    /// empty; providers fill in the fields they own.
    pub fn new(
        id: impl Into<String>,
        kind: SearchKind,
        source_kind: SourceKind,
        title: impl Into<String>,
        score: i64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            subtitle: None,
            score,
            source_kind,
            workspace_id: None,
            workspace_name: None,
            thread_id: None,
            message_id: None,
            panel_id: None,
            task_id: None,
            file_path: None,
            history_text: None,
            skill_name: None,
            command_name: None,
            location_label: None,
            updated_at: None,
        }
    }
}

/// Thread summary as exposed by the workspace enumeration collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub updated_at: i64,
}

/// One workspace's searchable surface: relative file paths plus thread
/// summaries. Callers implement scope by choosing which sources to pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSource {
    pub workspace_id: String,
    pub workspace_name: String,
    pub files: Vec<String>,
    pub threads: Vec<ThreadSummary>,
}

/// A single entry of a thread's conversation log. Only plain messages are
/// searchable; every other item kind deserializes to `Other` and is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConversationItem {
    Message {
        id: String,
        #[serde(default)]
        role: String,
        #[serde(default)]
        text: String,
    },
    #[serde(other)]
    Other,
}

/// Task record from the kanban store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanTask {
    pub id: String,
    pub workspace_id: String,
    pub panel_id: String,
    pub title: String,
    pub description: String,
}

/// Input-history record: previously submitted text plus an importance
/// weight accumulated by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    pub text: String,
    pub importance: i64,
}

/// Skill catalog record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub name: String,
    pub path: String,
    pub description: String,
}

/// Custom command catalog record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandEntry {
    pub name: String,
    pub path: String,
    pub description: String,
    pub argument_hint: String,
}
