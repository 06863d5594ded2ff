//! Phase-2 Enricher (`spec.md` §4.5): attaches shadow and reverse-shadow
//! observers to an already-timed, already-trained Phase-1 solution. Purely
//! greedy and deterministic — no optimization, no weekly-cap check (the
//! weekly limit in `spec.md` §4.4 constraint 8 is defined only over trained
//! assignments; observers carry no timing or fairness cost of their own).

#[cfg(test)]
#[path = "../tests/unit/enrich_test.rs"]
mod enrich_test;

use crate::model::vars::Phase1Solution;
use crate::models::problem::{NormalizedProblem, Role};
use crate::time::Minutes;
use hashbrown::HashMap;
use indexmap::IndexMap;

/// A Phase-1 event augmented with observer assignments. Event identity
/// (stage name, duration, start, end) and trained assignments are carried
/// through bit-for-bit from the Phase-1 solution.
#[derive(Debug, Clone)]
pub struct EnrichedEvent {
    pub stage_name: String,
    pub duration: Minutes,
    pub start: Minutes,
    pub end: Minutes,
    pub trained: IndexMap<String, String>,
    pub shadow: IndexMap<String, String>,
    pub reverse_shadow: IndexMap<String, String>,
}

pub fn enrich(problem: &NormalizedProblem, solution: &Phase1Solution) -> Vec<EnrichedEvent> {
    let shadow_pool = problem.pool_for(Role::Shadow);
    let reverse_pool = problem.pool_for(Role::ReverseShadow);
    let busy = problem.busy_by_interviewer();

    solution
        .events
        .iter()
        .map(|event| {
            let mut available_shadow = available_for(&shadow_pool, &busy, event.start, event.end);
            let mut available_reverse = available_for(&reverse_pool, &busy, event.start, event.end);

            let mut shadow = IndexMap::new();
            let mut reverse_shadow = IndexMap::new();

            for seat_id in event.trained.keys() {
                if !available_shadow.is_empty() {
                    shadow.insert(seat_id.clone(), available_shadow.remove(0).to_string());
                }
                if !available_reverse.is_empty() {
                    reverse_shadow.insert(seat_id.clone(), available_reverse.remove(0).to_string());
                }
            }

            EnrichedEvent {
                stage_name: event.stage_name.clone(),
                duration: event.duration,
                start: event.start,
                end: event.end,
                trained: event.trained.clone(),
                shadow,
                reverse_shadow,
            }
        })
        .collect()
}

/// Interviewers from `pool` (in its stable input order) whose busy
/// intervals don't overlap `[start, end)`.
fn available_for<'a>(
    pool: &[&'a str],
    busy: &HashMap<String, Vec<(Minutes, Minutes)>>,
    start: Minutes,
    end: Minutes,
) -> Vec<&'a str> {
    pool.iter()
        .copied()
        .filter(|id| match busy.get(*id) {
            Some(intervals) => !intervals.iter().any(|&(b_start, b_end)| overlaps(start, end, b_start, b_end)),
            None => true,
        })
        .collect()
}

fn overlaps(a_start: Minutes, a_end: Minutes, b_start: Minutes, b_end: Minutes) -> bool {
    a_end > b_start && b_end > a_start
}
