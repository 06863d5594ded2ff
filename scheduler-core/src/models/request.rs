//! Request-shaped types, serialized exactly as described in the public
//! contract. Every optional configuration field carries the default named
//! there, so a caller may omit all of them and still get the documented
//! behavior.

use serde::{Deserialize, Serialize};

/// Top-level request accepted by [`crate::solve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub stages: Vec<StageInput>,
    pub interviewers: Vec<InterviewerInput>,
    pub availability_windows: Vec<AvailabilityWindowInput>,
    #[serde(default)]
    pub busy_intervals: Vec<BusyIntervalInput>,

    #[serde(default = "default_time_step_minutes")]
    pub time_step_minutes: i64,
    #[serde(default = "default_weekly_limit")]
    pub weekly_limit: i64,
    #[serde(default = "default_max_time_seconds")]
    pub max_time_seconds: f64,
    #[serde(default)]
    pub require_distinct_days: bool,
    #[serde(default = "default_top_k_solutions")]
    pub top_k_solutions: usize,
    #[serde(default = "default_schedule_on_same_day")]
    pub schedule_on_same_day: bool,
    /// Carried through for API compatibility; the constraint model derives
    /// schedulable hours from `availability_windows` directly, which are
    /// always authoritative over this pair of clock times.
    #[serde(default = "default_daily_availability_start")]
    pub daily_availability_start: String,
    #[serde(default = "default_daily_availability_end")]
    pub daily_availability_end: String,
    #[serde(default)]
    pub min_gap_between_stages: i64,
}

fn default_time_step_minutes() -> i64 {
    15
}
fn default_weekly_limit() -> i64 {
    5
}
fn default_max_time_seconds() -> f64 {
    30.0
}
fn default_top_k_solutions() -> usize {
    50
}
fn default_schedule_on_same_day() -> bool {
    true
}
fn default_daily_availability_start() -> String {
    "09:00".to_string()
}
fn default_daily_availability_end() -> String {
    "17:00".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageInput {
    pub stage_name: String,
    pub duration: i64,
    #[serde(default)]
    pub is_fixed: bool,
    pub seats: Vec<SeatInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatInput {
    pub seat_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewerInput {
    pub id: String,
    #[serde(default)]
    pub current_load: i64,
    #[serde(default)]
    pub last2w_load: i64,
    /// Raw mode string, normalized by the Input Normalizer (lowercased,
    /// whitespace folded to `_`, `"reverse shadow"` folded to
    /// `"reverse_shadow"`).
    pub mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityWindowInput {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusyIntervalInput {
    pub interviewer_id: String,
    pub start: String,
    pub end: String,
}
