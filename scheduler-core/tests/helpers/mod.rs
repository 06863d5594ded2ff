//! Shared request-building helpers for the integration scenarios under
//! `tests/features/`, following this workspace's chained `with_*`/`build()`
//! construction style.

use scheduler_core::{
    AvailabilityWindowInput, BusyIntervalInput, InterviewerInput, ScheduleRequest, SeatInput, StageInput,
};

#[derive(Default)]
pub struct RequestBuilder {
    stages: Vec<StageInput>,
    interviewers: Vec<InterviewerInput>,
    availability_windows: Vec<AvailabilityWindowInput>,
    busy_intervals: Vec<BusyIntervalInput>,
    weekly_limit: Option<i64>,
    top_k_solutions: Option<usize>,
    schedule_on_same_day: Option<bool>,
    require_distinct_days: Option<bool>,
    min_gap_between_stages: Option<i64>,
    time_step_minutes: Option<i64>,
}

impl RequestBuilder {
    pub fn with_stage(mut self, name: &str, duration: i64, is_fixed: bool, seats: &[&str]) -> Self {
        self.stages.push(StageInput {
            stage_name: name.to_string(),
            duration,
            is_fixed,
            seats: seats.iter().map(|s| SeatInput { seat_id: s.to_string() }).collect(),
        });
        self
    }

    pub fn with_interviewer(mut self, id: &str, mode: &str, current_load: i64, last2w_load: i64) -> Self {
        self.interviewers.push(InterviewerInput { id: id.to_string(), current_load, last2w_load, mode: mode.to_string() });
        self
    }

    pub fn with_window(mut self, start: &str, end: &str) -> Self {
        self.availability_windows.push(AvailabilityWindowInput { start: start.to_string(), end: end.to_string() });
        self
    }

    pub fn with_busy(mut self, interviewer_id: &str, start: &str, end: &str) -> Self {
        self.busy_intervals.push(BusyIntervalInput {
            interviewer_id: interviewer_id.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        });
        self
    }

    pub fn with_weekly_limit(mut self, limit: i64) -> Self {
        self.weekly_limit = Some(limit);
        self
    }

    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k_solutions = Some(k);
        self
    }

    pub fn with_schedule_on_same_day(mut self, value: bool) -> Self {
        self.schedule_on_same_day = Some(value);
        self
    }

    pub fn with_require_distinct_days(mut self, value: bool) -> Self {
        self.require_distinct_days = Some(value);
        self
    }

    pub fn with_min_gap_between_stages(mut self, minutes: i64) -> Self {
        self.min_gap_between_stages = Some(minutes);
        self
    }

    pub fn with_time_step_minutes(mut self, minutes: i64) -> Self {
        self.time_step_minutes = Some(minutes);
        self
    }

    pub fn build(self) -> ScheduleRequest {
        ScheduleRequest {
            stages: self.stages,
            interviewers: self.interviewers,
            availability_windows: self.availability_windows,
            busy_intervals: self.busy_intervals,
            time_step_minutes: self.time_step_minutes.unwrap_or(15),
            weekly_limit: self.weekly_limit.unwrap_or(5),
            max_time_seconds: 1.0,
            require_distinct_days: self.require_distinct_days.unwrap_or(false),
            top_k_solutions: self.top_k_solutions.unwrap_or(50),
            schedule_on_same_day: self.schedule_on_same_day.unwrap_or(true),
            daily_availability_start: "09:00".to_string(),
            daily_availability_end: "17:00".to_string(),
            min_gap_between_stages: self.min_gap_between_stages.unwrap_or(0),
        }
    }
}
