// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content-filter state machine.
//!
//! The filter set is always non-empty: either exactly `{All}` or a
//! non-empty subset of the seven concrete categories. `toggle` is a pure
//! reducer over that state space.

use std::collections::BTreeSet;

use crate::types::{ContentFilter, SourceKind};

/// Selected content filters. Ordered for deterministic iteration.
pub type FilterSet = BTreeSet<ContentFilter>;

/// The default selection: everything.
pub fn all_filters() -> FilterSet {
    FilterSet::from([ContentFilter::All])
}

/// Apply one filter click to the current selection.
///
/// `All` is exclusive with every concrete category. Toggling a concrete
/// category off an otherwise-empty selection falls back to `{All}`.
pub fn toggle_content_filter(current: &FilterSet, selected: ContentFilter) -> FilterSet {
    if selected == ContentFilter::All {
        return all_filters();
    }

    let mut next: FilterSet = current
        .iter()
        .copied()
        .filter(|filter| *filter != ContentFilter::All)
        .collect();

    if !next.remove(&selected) {
        next.insert(selected);
    }
    if next.is_empty() {
        return all_filters();
    }
    next
}

/// Source categories enabled by a filter selection.
pub fn enabled_sources(filters: &FilterSet) -> BTreeSet<SourceKind> {
    if filters.contains(&ContentFilter::All) {
        return SourceKind::ALL.into_iter().collect();
    }
    filters.iter().filter_map(|filter| filter.source()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_exclusive() {
        let current = FilterSet::from([ContentFilter::Files, ContentFilter::Threads]);
        assert_eq!(toggle_content_filter(&current, ContentFilter::All), all_filters());
    }

    #[test]
    fn switches_from_all_to_concrete() {
        let next = toggle_content_filter(&all_filters(), ContentFilter::Files);
        assert_eq!(next, FilterSet::from([ContentFilter::Files]));
    }

    #[test]
    fn multi_select_and_fallback_to_all_when_emptied() {
        let mut current = all_filters();
        current = toggle_content_filter(&current, ContentFilter::Files);
        current = toggle_content_filter(&current, ContentFilter::Threads);
        assert_eq!(
            current,
            FilterSet::from([ContentFilter::Files, ContentFilter::Threads])
        );

        current = toggle_content_filter(&current, ContentFilter::Files);
        assert_eq!(current, FilterSet::from([ContentFilter::Threads]));

        current = toggle_content_filter(&current, ContentFilter::Threads);
        assert_eq!(current, all_filters());
    }

    #[test]
    fn toggle_never_produces_empty_or_mixed_all() {
        let concrete = [
            ContentFilter::Files,
            ContentFilter::Kanban,
            ContentFilter::Threads,
            ContentFilter::Messages,
            ContentFilter::History,
            ContentFilter::Skills,
            ContentFilter::Commands,
        ];
        let mut states: Vec<FilterSet> = vec![all_filters()];
        states.extend(concrete.iter().map(|f| FilterSet::from([*f])));
        states.push(concrete.iter().copied().collect());

        for state in &states {
            for selected in concrete.iter().copied().chain([ContentFilter::All]) {
                let next = toggle_content_filter(state, selected);
                assert!(!next.is_empty());
                if next.contains(&ContentFilter::All) {
                    assert_eq!(next.len(), 1);
                }
            }
        }
    }

    #[test]
    fn all_enables_every_source() {
        let sources = enabled_sources(&all_filters());
        assert_eq!(sources.len(), SourceKind::ALL.len());
    }

    #[test]
    fn concrete_selection_enables_only_itself() {
        let filters = FilterSet::from([ContentFilter::Skills, ContentFilter::History]);
        let sources = enabled_sources(&filters);
        assert_eq!(
            sources,
            BTreeSet::from([SourceKind::Skills, SourceKind::History])
        );
    }
}
