//! Stage ordering, gaps, and distinct-day placement (`spec.md` §4.3).

use crate::helpers::RequestBuilder;
use scheduler_core::ScheduleError;

#[test]
fn s1_two_stages_one_seat_same_day() {
    let request = RequestBuilder::default()
        .with_stage("phone_screen", 30, false, &["seat1"])
        .with_stage("onsite", 45, false, &["seat1"])
        .with_interviewer("trained1", "trained", 0, 0)
        .with_interviewer("trained2", "trained", 0, 0)
        .with_interviewer("shadow1", "shadow", 0, 0)
        .with_interviewer("shadow2", "shadow", 0, 0)
        .with_interviewer("reverse1", "reverse_shadow", 0, 0)
        .with_interviewer("reverse2", "reverse_shadow", 0, 0)
        .with_window("2025-09-01T09:00", "2025-09-01T17:00")
        .build();

    let response = scheduler_core::solve(&request).unwrap();

    assert_eq!(response.status, "OPTIMAL");
    let best = response.schedules.get("schedule1").unwrap();
    assert_eq!(best.events[0].start, "2025-09-01T09:00");
    assert_eq!(best.events[1].start, "2025-09-01T11:30");
    assert_eq!(best.events[1].end, "2025-09-01T12:15");
}

#[test]
fn s4_distinct_days_required_places_events_a_day_apart() {
    let request = RequestBuilder::default()
        .with_stage("phone_screen", 30, false, &["seat1"])
        .with_stage("onsite", 30, false, &["seat1"])
        .with_interviewer("trained1", "trained", 0, 0)
        .with_window("2025-09-01T09:00", "2025-09-01T17:00")
        .with_window("2025-09-02T09:00", "2025-09-02T17:00")
        .with_schedule_on_same_day(false)
        .build();

    let response = scheduler_core::solve(&request).unwrap();

    assert_eq!(response.status, "OPTIMAL");
    let best = response.schedules.get("schedule1").unwrap();
    assert_ne!(&best.events[0].start[..10], &best.events[1].start[..10]);
}

#[test]
fn s5_insufficient_days_fails_before_solving() {
    let request = RequestBuilder::default()
        .with_stage("phone_screen", 30, false, &["seat1"])
        .with_stage("onsite", 30, false, &["seat1"])
        .with_interviewer("trained1", "trained", 0, 0)
        .with_window("2025-09-01T09:00", "2025-09-01T17:00")
        .with_schedule_on_same_day(false)
        .build();

    let err = scheduler_core::solve(&request).unwrap_err();

    assert!(matches!(err, ScheduleError::InsufficientDays { found: 1, needed: 2 }));
}

/// `require_distinct_days=true` together with `schedule_on_same_day=true`
/// (gap 120) is exactly the combination where calendar-date distinctness and
/// the real 1440-minute pairwise separation diverge: the only slot on day 1
/// is 16:00-17:00, day 2 opens at 09:00, and a next-day 09:00 start is a
/// different calendar date but only 1020 minutes after day 1's 16:00.
#[test]
fn distinct_days_required_rejects_a_next_day_start_short_of_1440_minutes() {
    let request = RequestBuilder::default()
        .with_stage("phone_screen", 60, false, &["seat1"])
        .with_stage("onsite", 60, false, &["seat1"])
        .with_interviewer("trained1", "trained", 0, 0)
        .with_window("2025-09-01T16:00", "2025-09-01T17:00")
        .with_window("2025-09-02T09:00", "2025-09-02T17:00")
        .with_min_gap_between_stages(120)
        .with_schedule_on_same_day(true)
        .with_require_distinct_days(true)
        .build();

    let response = scheduler_core::solve(&request).unwrap();

    assert_eq!(response.status, "OPTIMAL");
    let best = response.schedules.get("schedule1").unwrap();
    assert_eq!(best.events[0].start, "2025-09-01T16:00");
    assert_ne!(best.events[1].start, "2025-09-02T09:00", "a next-day start 1020 minutes later must be rejected");
    assert_eq!(best.events[1].start, "2025-09-02T16:00");
}
