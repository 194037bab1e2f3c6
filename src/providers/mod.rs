// SPDX-License-Identifier: MIT OR Apache-2.0

//! One pure scoring function per source kind.
//!
//! Shared contract: a blank query returns no results; matching is
//! case-insensitive containment; scores are two bands per provider (a flat
//! prefix-match band, and an offset-based band for later hits) so that the
//! bands encode priority between source kinds.

mod commands;
mod files;
mod history;
mod kanban;
mod messages;
mod skills;
mod threads;

pub use commands::search_commands;
pub use files::search_files;
pub use history::search_history;
pub use kanban::search_kanban_tasks;
pub use messages::search_messages;
pub use skills::search_skills;
pub use threads::search_threads;
