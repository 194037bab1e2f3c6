// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions.
//!
//! The engine itself is total over its documented input shapes; only the
//! persistence edges (snapshot files, recency store) can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while persisting the recency store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(
        "failed to write recency store at '{path}': {source}\n\n\
         Suggestion: check the directory is writable, or point --store at\n\
         a different location."
    )]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode recency store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure while loading a corpus snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(
        "failed to read corpus snapshot '{path}': {source}\n\n\
         Suggestion: pass --snapshot with the path to an exported snapshot.\n\
         Example: unisearch search \"query\" --snapshot corpus.json"
    )]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(
        "corpus snapshot '{path}' is not valid JSON: {source}\n\n\
         Suggestion: re-export the snapshot; partial or hand-edited files\n\
         often drop a closing brace."
    )]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
