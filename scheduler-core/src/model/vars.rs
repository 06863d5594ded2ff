//! Shared value types produced by the search and consumed by the ranker
//! and enricher. These stand in for the decision-variable values a CP
//! solver would hand back through `solver.Value(var)`.

use crate::time::Minutes;
use indexmap::IndexMap;

/// One timed, trained-only event, as captured straight from the search.
#[derive(Debug, Clone)]
pub struct Phase1Event {
    pub stage_name: String,
    pub duration: Minutes,
    pub start: Minutes,
    pub end: Minutes,
    /// `seat_id -> interviewer_id` for the trained role.
    pub trained: IndexMap<String, String>,
}

/// One feasible Phase-1 assignment: stage times and trained assignments for
/// every stage in permutation order, with its objective value.
#[derive(Debug, Clone)]
pub struct Phase1Solution {
    pub score: i64,
    pub events: Vec<Phase1Event>,
}

/// `1 + last2w_load`: the per-assignment fairness weight from `spec.md` §4.3.
pub fn fairness_weight(last2w_load: i64) -> i64 {
    1 + last2w_load
}

/// Sorted, deduplicated grid-aligned start times for a stage of the given
/// duration that fit entirely inside at least one window and are no
/// earlier than `min_start`.
pub fn candidate_starts(
    duration: Minutes,
    min_start: Minutes,
    windows: &[(Minutes, Minutes)],
    time_step: Minutes,
) -> Vec<Minutes> {
    use std::collections::BTreeSet;

    let mut starts = BTreeSet::new();
    for &(window_start, window_end) in windows {
        let lower = min_start.max(window_start);
        let aligned = align_up(lower, time_step);
        let upper = window_end - duration;
        if aligned > upper {
            continue;
        }
        let mut t = aligned;
        while t <= upper {
            starts.insert(t);
            t += time_step;
        }
    }
    starts.into_iter().collect()
}

fn align_up(value: Minutes, step: Minutes) -> Minutes {
    if step <= 0 {
        return value;
    }
    let remainder = value % step;
    if remainder == 0 {
        value
    } else {
        value + (step - remainder)
    }
}
