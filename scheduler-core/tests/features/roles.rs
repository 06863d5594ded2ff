//! Trained/shadow/reverse-shadow role assignment and fairness (`spec.md` §4.3, §4.6).

use crate::helpers::RequestBuilder;

#[test]
fn s3_trained_only_pool_still_solves_with_empty_observer_roles() {
    let request = RequestBuilder::default()
        .with_stage("phone_screen", 30, false, &["seat1"])
        .with_interviewer("trained1", "trained", 0, 0)
        .with_window("2025-09-01T09:00", "2025-09-01T17:00")
        .build();

    let response = scheduler_core::solve(&request).unwrap();

    assert_eq!(response.status, "OPTIMAL");
    let best = response.schedules.get("schedule1").unwrap();
    assert!(best.events[0].assigned.shadow.is_empty());
    assert!(best.events[0].assigned.reverse_shadow.is_empty());
}

#[test]
fn s6_fairness_outweighs_an_equally_compact_alternative() {
    let request = RequestBuilder::default()
        .with_stage("phone_screen", 30, false, &["seat1"])
        .with_interviewer("rested", "trained", 0, 0)
        .with_interviewer("loaded", "trained", 0, 5)
        .with_window("2025-09-01T09:00", "2025-09-01T17:00")
        .build();

    let response = scheduler_core::solve(&request).unwrap();

    let best = response.schedules.get("schedule1").unwrap();
    assert_eq!(best.events[0].assigned.trained.get("seat1"), Some(&"rested".to_string()));
}
