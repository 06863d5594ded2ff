//! Busy-interval exclusion (`spec.md` §4.5).

use crate::helpers::RequestBuilder;

#[test]
fn s2_busy_interviewer_is_never_assigned_to_an_overlapping_event() {
    let request = RequestBuilder::default()
        .with_stage("phone_screen", 30, false, &["seat1"])
        .with_interviewer("Busy", "trained", 0, 0)
        .with_interviewer("Free", "trained", 0, 0)
        .with_window("2025-09-01T09:00", "2025-09-01T17:00")
        .with_busy("Busy", "2025-09-01T09:00", "2025-09-01T09:30")
        .build();

    let response = scheduler_core::solve(&request).unwrap();

    for schedule in response.schedules.values() {
        for event in &schedule.events {
            if event.start == "2025-09-01T09:00" {
                assert_ne!(event.assigned.trained.get("seat1"), Some(&"Busy".to_string()));
            }
        }
    }
}
