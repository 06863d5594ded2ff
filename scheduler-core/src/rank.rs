//! Ranker / Formatter (`spec.md` §4.6): merges Phase-1 solutions collected
//! across every permutation, enriches each with Phase-2 observers, sorts by
//! ascending score, keeps the top `top_k_solutions`, and renders the wire
//! response.

#[cfg(test)]
#[path = "../tests/unit/rank_test.rs"]
mod rank_test;

use crate::enrich::{enrich, EnrichedEvent};
use crate::model::vars::Phase1Solution;
use crate::models::problem::NormalizedProblem;
use crate::models::response::{AssignedRoles, EventOutput, Metrics, ScheduleOutput, ScheduleResponse};
use crate::solver::SolverStatus;
use crate::time::{datetime_from_minutes, to_iso};
use chrono::NaiveDateTime;
use indexmap::IndexMap;

/// Builds the final response from every permutation's `(status, solutions)`
/// outcome.
///
/// Status resolution (`SPEC_FULL.md` §9's restored passthrough feature):
/// on the single-permutation fast path — by far the common case, since most
/// requests have at most one or two movable stages — the permutation's own
/// terminal status (`OPTIMAL`, `FEASIBLE`, `INFEASIBLE`, or a backend-named
/// `SolverStatus::Other`) is reported verbatim, exactly as the source this
/// was distilled from returns `solver.StatusName(status)` untouched from its
/// single `solve_schedule` call. With more than one permutation there is no
/// equivalent single status to report — `spec.md` §9 flags this as an open
/// ambiguity — so the literal §4.6 merge policy applies instead: `OPTIMAL`
/// if any permutation produced a solution, `INFEASIBLE` otherwise.
pub fn rank_and_format(problem: &NormalizedProblem, outcomes: Vec<(SolverStatus, Vec<Phase1Solution>)>) -> ScheduleResponse {
    if outcomes.is_empty() {
        return ScheduleResponse::infeasible("INFEASIBLE");
    }

    let status = if let [(only_status, _)] = outcomes.as_slice() {
        only_status.to_string()
    } else if outcomes.iter().any(|(_, solutions)| !solutions.is_empty()) {
        "OPTIMAL".to_string()
    } else {
        "INFEASIBLE".to_string()
    };

    let mut solutions: Vec<Phase1Solution> = outcomes.into_iter().flat_map(|(_, solutions)| solutions).collect();
    if solutions.is_empty() {
        return ScheduleResponse::infeasible(status);
    }

    solutions.sort_by_key(|s| s.score);
    solutions.truncate(problem.config.top_k_solutions);

    let mut schedules = IndexMap::new();
    for (idx, solution) in solutions.iter().enumerate() {
        let events = enrich(problem, solution);
        schedules.insert(format!("schedule{}", idx + 1), format_schedule(problem.epoch, solution.score, &events));
    }

    ScheduleResponse { status, schedules }
}

fn format_schedule(epoch: NaiveDateTime, score: i64, events: &[EnrichedEvent]) -> ScheduleOutput {
    let span_start = events.iter().map(|e| e.start).min().unwrap_or(0);
    let span_end = events.iter().map(|e| e.end).max().unwrap_or(0);
    let total_span_minutes = span_end - span_start;
    let busy_minutes: i64 = events.iter().map(|e| e.duration).sum();
    let idle_time_minutes = (total_span_minutes - busy_minutes).max(0);
    let efficiency = if total_span_minutes > 0 {
        (busy_minutes as f64 / total_span_minutes as f64 * 1000.0).round() / 1000.0
    } else {
        0.0
    };

    let event_outputs = events
        .iter()
        .map(|e| EventOutput {
            stage_name: e.stage_name.clone(),
            duration: e.duration,
            start: to_iso(datetime_from_minutes(e.start, epoch)),
            end: to_iso(datetime_from_minutes(e.end, epoch)),
            assigned: AssignedRoles {
                trained: e.trained.clone(),
                shadow: e.shadow.clone(),
                reverse_shadow: e.reverse_shadow.clone(),
            },
        })
        .collect();

    ScheduleOutput { score, events: event_outputs, metrics: Metrics { total_span_minutes, idle_time_minutes, efficiency } }
}
