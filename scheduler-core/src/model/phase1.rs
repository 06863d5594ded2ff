//! Builds the Phase-1 constraint model for one stage ordering.
//!
//! The model here is a compiled set of search parameters rather than a
//! literal list of `IntVar`/`BoolVar` objects: this workspace's search
//! engine (`crate::solver`) walks the decision space directly instead of
//! delegating to an external MIP/CP backend (see `SPEC_FULL.md` §4.4 for why).
//! The builder still follows the chained, `Result`-at-`build()` shape the
//! rest of this codebase's ancestry uses for assembling a feature/model out
//! of named pieces.

#[cfg(test)]
#[path = "../../tests/unit/model_phase1_test.rs"]
mod phase1_test;

use crate::error::{GenericError, GenericResult};
use crate::models::problem::{NormalizedProblem, Role, Stage};
use crate::time::Minutes;
use hashbrown::HashMap;

/// Minimum gap enforced between consecutive stages, per `spec.md` §4.3
/// constraint 1.
pub fn min_gap_minutes(schedule_on_same_day: bool, min_gap_between_stages: Minutes) -> Minutes {
    if schedule_on_same_day {
        min_gap_between_stages.max(120)
    } else {
        min_gap_between_stages.max(24 * 60)
    }
}

/// The compiled Phase-1 model for a single stage ordering.
#[derive(Debug, Clone)]
pub struct Phase1Model {
    /// Stages in the order they must be scheduled, already resolved from
    /// the permutation.
    pub ordered_stages: Vec<Stage>,
    pub windows: Vec<(Minutes, Minutes)>,
    pub gap: Minutes,
    pub distinct_days_required: bool,
    /// Trained candidate pool, shared by every seat in every stage, sorted
    /// by ascending fairness weight (ties broken by original input order)
    /// so the search visits cheaper assignments first.
    pub trained_pool: Vec<String>,
    pub weekly_limit: i64,
    pub time_step: Minutes,
    /// `current_load`/`last2w_load`, keyed by interviewer id.
    pub current_loads: HashMap<String, i64>,
    pub last2w_loads: HashMap<String, i64>,
    /// Busy intervals per interviewer, sorted ascending by start.
    pub busy_by_interviewer: HashMap<String, Vec<(Minutes, Minutes)>>,
}

/// Assembles a [`Phase1Model`] for one permutation (`order`) of `problem`.
#[derive(Default)]
pub struct Phase1ModelBuilder<'a> {
    problem: Option<&'a NormalizedProblem>,
    order: Option<&'a [usize]>,
}

impl<'a> Phase1ModelBuilder<'a> {
    pub fn with_problem(mut self, problem: &'a NormalizedProblem) -> Self {
        self.problem = Some(problem);
        self
    }

    pub fn with_ordering(mut self, order: &'a [usize]) -> Self {
        self.order = Some(order);
        self
    }

    pub fn build(self) -> GenericResult<Phase1Model> {
        let problem: &NormalizedProblem = self.problem.ok_or_else(|| -> GenericError { "missing problem".into() })?;
        let order: &[usize] = self.order.ok_or_else(|| -> GenericError { "missing ordering".into() })?;

        let ordered_stages: Vec<Stage> = order.iter().map(|&i| problem.stages[i].clone()).collect();

        let mut trained_pool: Vec<String> = problem.pool_for(Role::Trained).into_iter().map(str::to_string).collect();
        if trained_pool.is_empty() {
            return Err("trained pool is empty".into());
        }
        let last2w_load_of = |id: &str| problem.interviewers.get(id).map(|iv| iv.last2w_load).unwrap_or(0);
        trained_pool.sort_by_key(|id| last2w_load_of(id));

        let windows: Vec<(Minutes, Minutes)> = problem.windows.iter().map(|w| (w.start, w.end)).collect();

        let gap = min_gap_minutes(problem.config.schedule_on_same_day, problem.config.min_gap_between_stages);
        let distinct_days_required = problem.config.require_distinct_days || !problem.config.schedule_on_same_day;

        let mut current_loads = HashMap::new();
        let mut last2w_loads = HashMap::new();
        for iv in problem.interviewers.values() {
            current_loads.insert(iv.id.clone(), iv.current_load);
            last2w_loads.insert(iv.id.clone(), iv.last2w_load);
        }

        let busy_by_interviewer = problem.busy_by_interviewer();

        Ok(Phase1Model {
            ordered_stages,
            windows,
            gap,
            distinct_days_required,
            trained_pool,
            weekly_limit: problem.config.weekly_limit,
            time_step: problem.config.time_step_minutes,
            current_loads,
            last2w_loads,
            busy_by_interviewer,
        })
    }
}

pub fn build_phase1_model(problem: &NormalizedProblem, order: &[usize]) -> GenericResult<Phase1Model> {
    Phase1ModelBuilder::default().with_problem(problem).with_ordering(order).build()
}
