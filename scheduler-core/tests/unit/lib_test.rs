use super::*;
use std::sync::{Arc, Mutex};

fn request() -> ScheduleRequest {
    ScheduleRequest {
        stages: vec![StageInput {
            stage_name: "phone_screen".to_string(),
            duration: 30,
            is_fixed: false,
            seats: vec![SeatInput { seat_id: "seat1".to_string() }],
        }],
        interviewers: vec![InterviewerInput {
            id: "alice".to_string(),
            current_load: 0,
            last2w_load: 0,
            mode: "trained".to_string(),
        }],
        availability_windows: vec![AvailabilityWindowInput {
            start: "2026-08-03T09:00".to_string(),
            end: "2026-08-03T17:00".to_string(),
        }],
        busy_intervals: vec![],
        time_step_minutes: 15,
        weekly_limit: 5,
        max_time_seconds: 1.0,
        require_distinct_days: false,
        top_k_solutions: 10,
        schedule_on_same_day: true,
        daily_availability_start: "09:00".to_string(),
        daily_availability_end: "17:00".to_string(),
        min_gap_between_stages: 0,
    }
}

#[test]
fn solve_with_logger_reports_at_least_one_line_per_ordering_and_a_final_summary() {
    let lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = lines.clone();
    let logger: InfoLogger = Arc::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string()));

    let response = solve_with_logger(&request(), &logger).unwrap();

    assert_eq!(response.status, "OPTIMAL");
    let captured = lines.lock().unwrap();
    assert!(captured.iter().any(|line| line.starts_with("normalized problem")));
    assert!(captured.iter().any(|line| line.starts_with("ordering 0")));
    assert!(captured.last().unwrap().starts_with("status OPTIMAL"));
}

#[test]
fn solve_never_calls_the_default_logger_observably() {
    // `solve` delegates to `solve_with_logger` with a no-op logger; this just
    // confirms the plain entry point still returns the same result shape.
    let response = solve(&request()).unwrap();
    assert_eq!(response.status, "OPTIMAL");
}
