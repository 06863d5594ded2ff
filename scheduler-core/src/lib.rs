//! Multi-stage interview scheduling engine.
//!
//! [`solve`] runs the full pipeline described across `SPEC_FULL.md` §4:
//! normalize the request, enumerate stage orderings consistent with each
//! stage's `is_fixed` flag, build and search a Phase-1 timing/trained-role
//! model per ordering, enrich every captured solution with Phase-2 shadow
//! and reverse-shadow observers, then rank and format the merged result.
//!
//! [`solve_with_logger`] runs the same pipeline but reports progress through
//! an [`InfoLogger`] instead of discarding it; see `logging` for why that's
//! a closure rather than a global subscriber.

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod enrich;
pub mod error;
pub mod logging;
pub mod model;
pub mod models;
pub mod normalize;
pub mod permute;
pub mod rank;
pub mod solver;
pub mod time;

pub use error::ScheduleError;
pub use logging::InfoLogger;
pub use models::request::{AvailabilityWindowInput, BusyIntervalInput, InterviewerInput, ScheduleRequest, SeatInput, StageInput};
pub use models::response::ScheduleResponse;

/// Runs the full scheduling pipeline for one request, discarding progress
/// messages. See [`solve_with_logger`] to observe them.
pub fn solve(request: &ScheduleRequest) -> Result<ScheduleResponse, ScheduleError> {
    solve_with_logger(request, &logging::noop_logger())
}

/// Runs the full scheduling pipeline for one request, reporting progress
/// through `logger` at the same granularity the teacher's own solver
/// reports generation/phase progress: permutation count and quota up front,
/// one line per permutation's capture, one line for the merged result.
pub fn solve_with_logger(request: &ScheduleRequest, logger: &InfoLogger) -> Result<ScheduleResponse, ScheduleError> {
    let problem = normalize::normalize(request)?;
    let orderings = permute::enumerate_orderings(&problem.stages);
    let quota = (problem.config.top_k_solutions / orderings.len().max(1)).max(1);

    (logger)(&format!("normalized problem: {} stage(s), {} ordering(s), quota {quota} per ordering", problem.stages.len(), orderings.len()));

    let mut outcomes = Vec::new();
    for (idx, order) in orderings.iter().enumerate() {
        let model = model::build_phase1_model(&problem, order)
            .map_err(|e| ScheduleError::invalid_input("phase1_model", e.to_string()))?;
        let (status, solutions) = solver::run_phase1(&model, quota, problem.config.max_time_seconds);
        (logger)(&format!("ordering {idx}: {status} with {} solution(s) captured", solutions.len()));
        outcomes.push((status, solutions));
    }

    let response = rank::rank_and_format(&problem, outcomes);
    (logger)(&format!("status {}: {} schedule(s) returned", response.status, response.schedules.len()));
    Ok(response)
}
