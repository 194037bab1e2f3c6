// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ranking comparator: merges a provider's raw score with a time-decaying
//! recency bonus and applies deterministic tie-breaks.

use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::recency::RecencyMap;
use crate::types::SearchResult;

/// Window over which a recent open still boosts a result.
pub const RECENT_OPEN_BOOST_MS: i64 = 1000 * 60 * 60 * 24 * 7;

const MAX_RECENCY_BONUS: i64 = 20;

/// Current wall clock in epoch milliseconds. Capture once per search call;
/// the comparator takes the captured value so a whole sort is evaluated
/// against a single instant.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// Bonus subtracted from a result's score when it was opened recently:
/// linear decay from 20 down to 0 over seven days. A timestamp in the
/// future (clock skew) gets the full bonus.
pub fn recency_bonus(result_id: &str, recency: &RecencyMap, now_ms: i64) -> i64 {
    let Some(&opened_at) = recency.get(result_id) else {
        return 0;
    };
    let elapsed = now_ms - opened_at;
    if elapsed <= 0 {
        return MAX_RECENCY_BONUS;
    }
    if elapsed >= RECENT_OPEN_BOOST_MS {
        return 0;
    }
    let ratio = 1.0 - elapsed as f64 / RECENT_OPEN_BOOST_MS as f64;
    (ratio * MAX_RECENCY_BONUS as f64).round() as i64
}

/// Strict weak ordering over results: ascending effective score (raw score
/// minus recency bonus), then descending entity update time, then ascending
/// title.
pub fn compare_results(
    a: &SearchResult,
    b: &SearchResult,
    recency: &RecencyMap,
    now_ms: i64,
) -> Ordering {
    let effective_a = a.score - recency_bonus(&a.id, recency, now_ms);
    let effective_b = b.score - recency_bonus(&b.id, recency, now_ms);
    effective_a
        .cmp(&effective_b)
        .then_with(|| b.updated_at.unwrap_or(0).cmp(&a.updated_at.unwrap_or(0)))
        .then_with(|| a.title.cmp(&b.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SearchKind, SourceKind};

    fn result(id: &str, title: &str, score: i64) -> SearchResult {
        SearchResult::new(id, SearchKind::File, SourceKind::Files, title, score)
    }

    #[test]
    fn bonus_is_zero_without_an_entry() {
        assert_eq!(recency_bonus("missing", &RecencyMap::new(), 1_000), 0);
    }

    #[test]
    fn bonus_decays_linearly_over_seven_days() {
        let now = RECENT_OPEN_BOOST_MS * 2;
        let mut recency = RecencyMap::new();
        recency.insert("r".to_string(), now);
        assert_eq!(recency_bonus("r", &recency, now), 20);

        recency.insert("r".to_string(), now - RECENT_OPEN_BOOST_MS / 2);
        assert_eq!(recency_bonus("r", &recency, now), 10);

        recency.insert("r".to_string(), now - RECENT_OPEN_BOOST_MS);
        assert_eq!(recency_bonus("r", &recency, now), 0);
    }

    #[test]
    fn future_timestamps_get_the_full_bonus() {
        let mut recency = RecencyMap::new();
        recency.insert("r".to_string(), 5_000);
        assert_eq!(recency_bonus("r", &recency, 1_000), 20);
    }

    #[test]
    fn uses_recency_boost_when_base_score_is_equal() {
        let a = result("a", "A", 100);
        let b = result("b", "B", 100);
        let now = now_ms();
        let mut recency = RecencyMap::new();
        recency.insert("b".to_string(), now);

        let mut sorted = vec![a, b];
        sorted.sort_by(|left, right| compare_results(left, right, &recency, now));
        assert_eq!(sorted[0].id, "b");
    }

    #[test]
    fn more_recently_updated_entities_win_ties() {
        let mut a = result("a", "Z", 50);
        a.updated_at = Some(10);
        let mut b = result("b", "A", 50);
        b.updated_at = Some(20);

        assert_eq!(compare_results(&a, &b, &RecencyMap::new(), 0), Ordering::Greater);
    }

    #[test]
    fn title_is_the_final_tie_break() {
        let a = result("a", "apple", 50);
        let b = result("b", "banana", 50);
        assert_eq!(compare_results(&a, &b, &RecencyMap::new(), 0), Ordering::Less);
    }
}
