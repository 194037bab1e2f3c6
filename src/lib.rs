// SPDX-License-Identifier: MIT OR Apache-2.0

//! unisearch - Unified multi-source workspace search library
//!
//! Scores and merges matches from files, kanban tasks, conversation threads,
//! messages, input history, skills and custom commands into a single ranked
//! result list. Every search is a fresh, synchronous scan over a
//! caller-supplied snapshot of data; there is no persistent index.

pub mod config;
pub mod errors;
pub mod filters;
pub mod indexing;
pub mod limits;
pub mod matching;
pub mod metrics;
pub mod output;
pub mod providers;
pub mod ranking;
pub mod recency;
pub mod search;
pub mod snapshot;
pub mod types;
