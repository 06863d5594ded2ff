//! Response-shaped types, mirroring the public contract.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Result of a [`crate::solve`] call that did not fail validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub status: String,
    /// Keys are `"schedule1"`, `"schedule2"`, ... in ascending score order;
    /// an [`IndexMap`] is used (rather than a `HashMap`) specifically to
    /// preserve that order through serialization.
    pub schedules: IndexMap<String, ScheduleOutput>,
}

impl ScheduleResponse {
    pub fn infeasible(status: impl Into<String>) -> Self {
        ScheduleResponse { status: status.into(), schedules: IndexMap::new() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub score: i64,
    pub events: Vec<EventOutput>,
    pub metrics: Metrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventOutput {
    pub stage_name: String,
    pub duration: i64,
    pub start: String,
    pub end: String,
    pub assigned: AssignedRoles,
}

/// Per-role seat assignments for a single event. A seat that has no
/// available observer in a role is simply absent from that role's map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignedRoles {
    pub trained: IndexMap<String, String>,
    #[serde(default)]
    pub shadow: IndexMap<String, String>,
    #[serde(default)]
    pub reverse_shadow: IndexMap<String, String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Metrics {
    pub total_span_minutes: i64,
    pub idle_time_minutes: i64,
    pub efficiency: f64,
}
