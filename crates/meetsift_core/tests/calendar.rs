use chrono::NaiveDate;
use meetsift_core::{is_on_calendar, MeetingAction, MeetingService, StatusPatch};

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap()
}

#[test]
fn calendar_is_empty_until_something_is_accepted() {
    let service = MeetingService::with_demo_data().unwrap();
    assert!(service.calendar_days().is_empty());
    assert!(service.calendar_day(day(2025, 4, 11)).is_empty());
}

#[test]
fn calendar_day_lists_accepted_meetings_on_that_date() {
    let mut service = MeetingService::with_demo_data().unwrap();
    service.apply_action("m1", MeetingAction::Accept).unwrap();
    service.apply_action("m2", MeetingAction::Accept).unwrap();

    let on_eleventh: Vec<&str> = service
        .calendar_day(day(2025, 4, 11))
        .into_iter()
        .map(|meeting| meeting.id.as_str())
        .collect();
    assert_eq!(on_eleventh, vec!["m1"]);
    assert!(service.calendar_day(day(2025, 4, 13)).is_empty());
}

#[test]
fn contradictory_or_archived_meetings_stay_off_the_calendar() {
    let mut service = MeetingService::with_demo_data().unwrap();
    service
        .set_status(
            "m1",
            StatusPatch {
                accepted: Some(true),
                declined: Some(true),
                archived: None,
            },
        )
        .unwrap();
    service
        .set_status(
            "m2",
            StatusPatch {
                accepted: Some(true),
                archived: Some(true),
                ..StatusPatch::default()
            },
        )
        .unwrap();

    assert!(!is_on_calendar(service.get_meeting("m1").unwrap()));
    assert!(!is_on_calendar(service.get_meeting("m2").unwrap()));
    assert!(service.calendar_days().is_empty());
}

#[test]
fn calendar_days_are_sorted_and_unique() {
    let mut service = MeetingService::with_demo_data().unwrap();
    for id in ["m6", "m3", "m1", "m4"] {
        service.apply_action(id, MeetingAction::Accept).unwrap();
    }

    assert_eq!(
        service.calendar_days(),
        vec![
            day(2025, 4, 11),
            day(2025, 4, 13),
            day(2025, 4, 15),
            day(2025, 4, 18)
        ]
    );
}

#[test]
fn end_time_spans_the_duration() {
    let service = MeetingService::with_demo_data().unwrap();
    let meeting = service.get_meeting("m6").unwrap();
    assert_eq!(
        meeting.end_time().to_rfc3339(),
        "2025-04-18T17:00:00+00:00"
    );
}
