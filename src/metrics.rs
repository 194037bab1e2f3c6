// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search timing metrics. Development-only signal, never required for
//! correctness; visibility is controlled by the tracing subscriber filter.

/// Timing summary for one aggregator call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMetrics<'a> {
    pub query: &'a str,
    pub elapsed_ms: f64,
    pub result_count: usize,
}

/// Emit a metrics event. Blank queries are skipped; they never reach the
/// providers either.
pub fn report_search_metrics(metrics: &SearchMetrics<'_>) {
    if metrics.query.trim().is_empty() {
        return;
    }
    tracing::debug!(
        target: "unisearch::search",
        query = metrics.query,
        elapsed_ms = metrics.elapsed_ms,
        result_count = metrics.result_count,
        "search completed"
    );
}
