//! Input Normalizer (`spec.md` §4.1): turns request-shaped data into typed,
//! validated internal records, rejecting ill-formed input before any model
//! is built.
//!
//! `normalize` is idempotent: feeding a [`NormalizedProblem`] back through
//! the same request shape (by re-serializing the same source request)
//! produces byte-for-byte the same result, since normalization is a pure
//! function of its input with no hidden state.

#[cfg(test)]
#[path = "../tests/unit/normalize_test.rs"]
mod normalize_test;

use crate::error::ScheduleError;
use crate::models::problem::{
    AvailabilityWindow, BusyInterval, Config, Interviewer, NormalizedProblem, Role, Seat, Stage,
};
use crate::models::request::ScheduleRequest;
use crate::time::{minutes_since_epoch, parse_iso};
use hashbrown::HashMap;
use std::collections::BTreeSet;

pub fn normalize(request: &ScheduleRequest) -> Result<NormalizedProblem, ScheduleError> {
    if request.stages.is_empty() {
        return Err(ScheduleError::invalid_input("stages", "no stages provided"));
    }

    let mut interviewers = HashMap::new();
    let mut interviewer_order = Vec::with_capacity(request.interviewers.len());
    for (idx, iv) in request.interviewers.iter().enumerate() {
        let mode = Role::normalize(&iv.mode).ok_or_else(|| {
            ScheduleError::invalid_input(
                format!("interviewers[{idx}].mode"),
                format!("unrecognized role '{}'", iv.mode),
            )
        })?;
        interviewer_order.push(iv.id.clone());
        interviewers.insert(
            iv.id.clone(),
            Interviewer { id: iv.id.clone(), current_load: iv.current_load, last2w_load: iv.last2w_load, mode },
        );
    }

    let mut stages = Vec::with_capacity(request.stages.len());
    for (idx, stage) in request.stages.iter().enumerate() {
        if stage.duration <= 0 {
            return Err(ScheduleError::invalid_input(
                format!("stages[{idx}]"),
                format!("invalid duration for stage {}", stage.stage_name),
            ));
        }
        if stage.seats.is_empty() {
            return Err(ScheduleError::invalid_input(
                format!("stages[{idx}]"),
                format!("no seats defined for stage {}", stage.stage_name),
            ));
        }
        stages.push(Stage {
            name: stage.stage_name.clone(),
            duration_minutes: stage.duration,
            is_fixed: stage.is_fixed,
            seats: stage.seats.iter().map(|s| Seat { seat_id: s.seat_id.clone() }).collect(),
        });
    }

    if request.availability_windows.is_empty() {
        return Err(ScheduleError::invalid_input(
            "availability_windows",
            "no availability windows provided",
        ));
    }

    let mut parsed_windows = Vec::with_capacity(request.availability_windows.len());
    for (idx, w) in request.availability_windows.iter().enumerate() {
        let start = parse_iso(&w.start)
            .map_err(|e| ScheduleError::invalid_input(format!("availability_windows[{idx}].start"), e.to_string()))?;
        let end = parse_iso(&w.end)
            .map_err(|e| ScheduleError::invalid_input(format!("availability_windows[{idx}].end"), e.to_string()))?;
        if start >= end {
            return Err(ScheduleError::invalid_input(
                format!("availability_windows[{idx}]"),
                format!("invalid availability window: {start} >= {end}"),
            ));
        }
        parsed_windows.push((start, end));
    }

    let epoch = parsed_windows.iter().map(|(s, _)| *s).min().expect("non-empty, checked above");

    let windows: Vec<AvailabilityWindow> = parsed_windows
        .iter()
        .map(|(s, e)| AvailabilityWindow { start: minutes_since_epoch(*s, epoch), end: minutes_since_epoch(*e, epoch) })
        .collect();

    let mut busy_intervals = Vec::with_capacity(request.busy_intervals.len());
    for (idx, b) in request.busy_intervals.iter().enumerate() {
        let start = parse_iso(&b.start)
            .map_err(|e| ScheduleError::invalid_input(format!("busy_intervals[{idx}].start"), e.to_string()))?;
        let end = parse_iso(&b.end)
            .map_err(|e| ScheduleError::invalid_input(format!("busy_intervals[{idx}].end"), e.to_string()))?;
        if start >= end {
            return Err(ScheduleError::invalid_input(
                format!("busy_intervals[{idx}]"),
                format!("invalid busy interval for {}: {start} >= {end}", b.interviewer_id),
            ));
        }
        busy_intervals.push(BusyInterval {
            interviewer_id: b.interviewer_id.clone(),
            start: minutes_since_epoch(start, epoch),
            end: minutes_since_epoch(end, epoch),
        });
    }

    if !request.schedule_on_same_day {
        let mut distinct_days = BTreeSet::new();
        for (start, end) in &parsed_windows {
            let mut day = start.date();
            let end_day = end.date();
            while day <= end_day {
                distinct_days.insert(day);
                day += chrono::Duration::days(1);
            }
        }
        if distinct_days.len() < stages.len() {
            return Err(ScheduleError::InsufficientDays { found: distinct_days.len(), needed: stages.len() });
        }
    }

    let config = Config {
        time_step_minutes: request.time_step_minutes,
        weekly_limit: request.weekly_limit,
        max_time_seconds: request.max_time_seconds,
        require_distinct_days: request.require_distinct_days,
        top_k_solutions: request.top_k_solutions,
        schedule_on_same_day: request.schedule_on_same_day,
        min_gap_between_stages: request.min_gap_between_stages,
    };

    let problem = NormalizedProblem { stages, interviewers, interviewer_order, windows, busy_intervals, config, epoch };

    for (stage_idx, stage) in problem.stages.iter().enumerate() {
        if problem.pool_for(Role::Trained).is_empty() {
            let seat = stage.seats.first().expect("validated non-empty above");
            return Err(ScheduleError::empty_pool(
                format!("stages[{stage_idx}].seats[{}]", seat.seat_id),
                "empty candidate pool for role trained",
            ));
        }
    }

    Ok(problem)
}
