// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tuning constants: per-provider result caps, the global cap, and the
//! performance baseline verified by the test suite.

/// Recommended debounce interval for callers driving the engine from
/// keystrokes. The engine itself never rate limits.
pub const SEARCH_DEBOUNCE_MS: u64 = 120;

/// Global cap applied after ranking.
pub const SEARCH_TOTAL_LIMIT: usize = 120;

/// Per-provider raw-output caps, applied in emission order before the
/// global sort. Bounds worst-case provider fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderLimits {
    pub files: usize,
    pub kanban: usize,
    pub threads: usize,
    pub messages: usize,
    pub history: usize,
    pub skills: usize,
    pub commands: usize,
}

impl Default for ProviderLimits {
    fn default() -> Self {
        Self {
            files: 80,
            kanban: 40,
            threads: 40,
            messages: 80,
            history: 30,
            skills: 25,
            commands: 25,
        }
    }
}

/// Synthetic corpus dimensions and latency budget for the global-scan
/// performance contract.
#[derive(Debug, Clone, Copy)]
pub struct PerfBaseline {
    pub workspace_count: usize,
    pub files_per_workspace: usize,
    pub threads_per_workspace: usize,
    pub messages_per_thread: usize,
    pub max_elapsed_ms: u64,
}

pub const SEARCH_PERF_BASELINE_GLOBAL: PerfBaseline = PerfBaseline {
    workspace_count: 8,
    files_per_workspace: 1500,
    threads_per_workspace: 180,
    messages_per_thread: 16,
    max_elapsed_ms: 1600,
};
