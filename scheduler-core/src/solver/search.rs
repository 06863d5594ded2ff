//! The branch-and-bound search that plays the role of the CP-SAT backend
//! the source system this spec was distilled from delegates to. See
//! `SPEC_FULL.md` §4.4 for why this is hand-rolled rather than a dependency.

#[cfg(test)]
#[path = "../../tests/unit/solver_search_test.rs"]
mod search_test;

use crate::model::phase1::Phase1Model;
use crate::model::vars::{candidate_starts, fairness_weight, Phase1Event, Phase1Solution};
use crate::time::{Minutes, MINUTES_PER_DAY};
use hashbrown::HashMap;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Result of one Phase-1 search run.
pub struct SearchOutcome {
    pub solutions: Vec<Phase1Solution>,
    /// True if the search proved no further solutions exist (as opposed to
    /// stopping early because the quota was met or the time budget ran out).
    pub exhausted: bool,
}

/// Collects up to `quota` feasible Phase-1 solutions for `model`, stopping
/// early once the quota is met, the search space is exhausted, or `budget`
/// elapses. Solutions are returned in discovery order (cheap branches are
/// visited first, see `Phase1Model::trained_pool`'s ordering and the
/// ascending-start-time iteration below, but the Ranker re-sorts regardless).
pub fn enumerate(model: &Phase1Model, quota: usize, budget: Duration) -> SearchOutcome {
    let mut ctx = SearchCtx {
        model,
        deadline: Instant::now() + budget,
        quota,
        solutions: Vec::new(),
        cut_short: false,
    };

    let mut weekly_count: HashMap<&str, i64> = HashMap::new();
    let mut starts: Vec<Minutes> = Vec::new();
    let mut ends: Vec<Minutes> = Vec::new();
    let mut events: Vec<Phase1Event> = Vec::new();
    let mut fairness_cost: i64 = 0;

    dfs_stage(&mut ctx, 0, &mut starts, &mut ends, &mut events, &mut weekly_count, &mut fairness_cost);

    SearchOutcome { solutions: ctx.solutions, exhausted: !ctx.cut_short }
}

/// Single-shot fallback: the first feasible solution found, ignoring quota.
/// Used when `enumerate` captures nothing within its budget (`spec.md` §4.4
/// fallback).
pub fn solve_once(model: &Phase1Model, budget: Duration) -> Option<Phase1Solution> {
    let outcome = enumerate(model, 1, budget);
    outcome.solutions.into_iter().next()
}

struct SearchCtx<'a> {
    model: &'a Phase1Model,
    deadline: Instant,
    quota: usize,
    solutions: Vec<Phase1Solution>,
    cut_short: bool,
}

impl<'a> SearchCtx<'a> {
    fn should_stop(&mut self) -> bool {
        if self.solutions.len() >= self.quota {
            self.cut_short = true;
            return true;
        }
        if Instant::now() >= self.deadline {
            self.cut_short = true;
            return true;
        }
        false
    }
}

#[allow(clippy::too_many_arguments)]
fn dfs_stage<'a>(
    ctx: &mut SearchCtx<'a>,
    stage_pos: usize,
    starts: &mut Vec<Minutes>,
    ends: &mut Vec<Minutes>,
    events: &mut Vec<Phase1Event>,
    weekly_count: &mut HashMap<&'a str, i64>,
    fairness_cost: &mut i64,
) {
    if ctx.should_stop() {
        return;
    }

    if stage_pos == ctx.model.ordered_stages.len() {
        let span = ends.last().copied().unwrap_or(0) - starts.first().copied().unwrap_or(0);
        let score = 100 * *fairness_cost + span;
        ctx.solutions.push(Phase1Solution { score, events: events.clone() });
        return;
    }

    let stage = &ctx.model.ordered_stages[stage_pos];
    let min_start = if stage_pos == 0 { 0 } else { ends[stage_pos - 1] + ctx.model.gap };

    let starts_candidates = candidate_starts(stage.duration_minutes, min_start, &ctx.model.windows, ctx.model.time_step);

    for start in starts_candidates {
        if ctx.should_stop() {
            return;
        }
        let end = start + stage.duration_minutes;

        // `spec.md` §4.3 constraint 3: every pair of stages must start at
        // least 1440 minutes (one calendar day) apart, not merely fall on
        // different calendar dates — two starts 09-01T16:00/09-02T09:00 are
        // on different dates but only 1020 minutes apart, which the pairwise
        // check below correctly rejects.
        if ctx.model.distinct_days_required && starts.iter().any(|&prev| (start - prev).abs() < MINUTES_PER_DAY) {
            continue;
        }

        starts.push(start);
        ends.push(end);

        assign_seats(
            ctx,
            stage_pos,
            0,
            start,
            end,
            &mut HashSet::new(),
            IndexMap::new(),
            starts,
            ends,
            events,
            weekly_count,
            fairness_cost,
        );

        starts.pop();
        ends.pop();
    }
}

#[allow(clippy::too_many_arguments)]
fn assign_seats<'a>(
    ctx: &mut SearchCtx<'a>,
    stage_pos: usize,
    seat_idx: usize,
    stage_start: Minutes,
    stage_end: Minutes,
    taken: &mut HashSet<&'a str>,
    trained: IndexMap<String, String>,
    starts: &mut Vec<Minutes>,
    ends: &mut Vec<Minutes>,
    events: &mut Vec<Phase1Event>,
    weekly_count: &mut HashMap<&'a str, i64>,
    fairness_cost: &mut i64,
) {
    if ctx.should_stop() {
        return;
    }

    let stage = &ctx.model.ordered_stages[stage_pos];

    if seat_idx == stage.seats.len() {
        // Commit this stage: bump weekly counts, push the event, recurse.
        let mut bumped: Vec<&'a str> = Vec::new();
        for iv in trained.values() {
            let iv_ref: &'a str =
                ctx.model.trained_pool.iter().find(|c| c.as_str() == iv.as_str()).map(|s| s.as_str()).unwrap();
            *weekly_count.entry(iv_ref).or_insert(0) += 1;
            bumped.push(iv_ref);
        }

        events.push(Phase1Event {
            stage_name: stage.name.clone(),
            duration: stage.duration_minutes,
            start: stage_start,
            end: stage_end,
            trained: trained.clone(),
        });

        dfs_stage(ctx, stage_pos + 1, starts, ends, events, weekly_count, fairness_cost);

        events.pop();
        for iv_ref in bumped {
            if let Some(c) = weekly_count.get_mut(iv_ref) {
                *c -= 1;
            }
        }
        return;
    }

    let seat = &stage.seats[seat_idx];

    for candidate in &ctx.model.trained_pool {
        if ctx.should_stop() {
            return;
        }
        let candidate: &str = candidate.as_str();
        if taken.contains(candidate) {
            continue;
        }

        let current_load = ctx.model.current_loads.get(candidate).copied().unwrap_or(0);
        let already_used = weekly_count.get(candidate).copied().unwrap_or(0);
        if already_used + current_load + 1 > ctx.model.weekly_limit {
            continue;
        }

        if let Some(busy) = ctx.model.busy_by_interviewer.get(candidate) {
            if busy.iter().any(|&(b_start, b_end)| overlaps(stage_start, stage_end, b_start, b_end)) {
                continue;
            }
        }

        taken.insert(candidate);
        let mut next_trained = trained.clone();
        next_trained.insert(seat.seat_id.clone(), candidate.to_string());
        let weight = fairness_weight(ctx.model.last2w_loads.get(candidate).copied().unwrap_or(0));
        *fairness_cost += weight;

        assign_seats(
            ctx,
            stage_pos,
            seat_idx + 1,
            stage_start,
            stage_end,
            taken,
            next_trained,
            starts,
            ends,
            events,
            weekly_count,
            fairness_cost,
        );

        *fairness_cost -= weight;
        taken.remove(candidate);
    }
}

/// Open-interval overlap test from `spec.md` §4.5: `not (end <= busy.start
/// or busy.end <= start)`.
fn overlaps(a_start: Minutes, a_end: Minutes, b_start: Minutes, b_end: Minutes) -> bool {
    a_end > b_start && b_end > a_start
}
