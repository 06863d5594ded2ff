//! Validated, typed internal representation produced by the Input
//! Normalizer and consumed by every later stage. Nothing here is mutated
//! after normalization; each permutation's model/search pass only reads it.

use crate::time::Minutes;
use hashbrown::HashMap;

/// The role an interviewer plays, or a seat-role slot expects to be filled
/// by. Canonical form after [`Role::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Trained,
    Shadow,
    ReverseShadow,
}

impl Role {
    /// Lowercases, folds whitespace to `_`, and maps `"reverse shadow"`/
    /// `"reverse_shadow"` to the canonical [`Role::ReverseShadow`].
    pub fn normalize(raw: &str) -> Option<Role> {
        let folded = raw.trim().to_lowercase().replace(' ', "_");
        match folded.as_str() {
            "trained" => Some(Role::Trained),
            "shadow" => Some(Role::Shadow),
            "reverse_shadow" => Some(Role::ReverseShadow),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Trained => "trained",
            Role::Shadow => "shadow",
            Role::ReverseShadow => "reverse_shadow",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Interviewer {
    pub id: String,
    pub current_load: i64,
    pub last2w_load: i64,
    pub mode: Role,
}

#[derive(Debug, Clone)]
pub struct AvailabilityWindow {
    pub start: Minutes,
    pub end: Minutes,
}

#[derive(Debug, Clone)]
pub struct BusyInterval {
    pub interviewer_id: String,
    pub start: Minutes,
    pub end: Minutes,
}

/// One seat within a stage. The trained/shadow/reverse_shadow candidate
/// pools are derived globally from interviewer `mode`, not customized per
/// seat (spec's Design Notes: pools are shared per (stage, role)).
#[derive(Debug, Clone)]
pub struct Seat {
    pub seat_id: String,
}

#[derive(Debug, Clone)]
pub struct Stage {
    pub name: String,
    pub duration_minutes: Minutes,
    pub is_fixed: bool,
    pub seats: Vec<Seat>,
}

/// Solver-facing configuration, carrying every knob from the request with
/// its default already resolved.
#[derive(Debug, Clone)]
pub struct Config {
    pub time_step_minutes: Minutes,
    pub weekly_limit: i64,
    pub max_time_seconds: f64,
    pub require_distinct_days: bool,
    pub top_k_solutions: usize,
    pub schedule_on_same_day: bool,
    pub min_gap_between_stages: Minutes,
}

/// Output of the Input Normalizer: typed, validated, ready for permutation
/// enumeration and model construction.
#[derive(Debug, Clone)]
pub struct NormalizedProblem {
    pub stages: Vec<Stage>,
    /// Keyed by interviewer id, for O(1) lookup.
    pub interviewers: HashMap<String, Interviewer>,
    /// Interviewer ids in the order they appeared in the request. Pool
    /// derivation and Phase-2's greedy tie-break both iterate in this order
    /// rather than hash order, so results are reproducible.
    pub interviewer_order: Vec<String>,
    pub windows: Vec<AvailabilityWindow>,
    pub busy_intervals: Vec<BusyInterval>,
    pub config: Config,
    pub epoch: chrono::NaiveDateTime,
}

impl NormalizedProblem {
    /// The candidate pool for `role` in this request: every interviewer
    /// whose mode equals `role`, in input order.
    pub fn pool_for(&self, role: Role) -> Vec<&str> {
        self.interviewer_order
            .iter()
            .filter(|id| self.interviewers.get(id.as_str()).map(|iv| iv.mode) == Some(role))
            .map(|id| id.as_str())
            .collect()
    }

    /// Busy intervals grouped by interviewer id, each list sorted ascending
    /// by start. Shared by the Phase-1 model builder and the Phase-2
    /// enricher so both see the same view of availability.
    pub fn busy_by_interviewer(&self) -> HashMap<String, Vec<(Minutes, Minutes)>> {
        let mut grouped: HashMap<String, Vec<(Minutes, Minutes)>> = HashMap::new();
        for busy in &self.busy_intervals {
            grouped.entry(busy.interviewer_id.clone()).or_default().push((busy.start, busy.end));
        }
        for intervals in grouped.values_mut() {
            intervals.sort_unstable();
        }
        grouped
    }
}
