use meetsift_core::{
    filter_by_status, group_by_relevance, upcoming, InMemoryMeetingRepository, MeetingAction,
    MeetingService, RelevanceScore, StatusCriteria, StatusPatch, DEFAULT_UPCOMING_LIMIT,
};

fn service() -> MeetingService<InMemoryMeetingRepository> {
    MeetingService::with_demo_data().expect("demo data should load")
}

fn ids<'a>(meetings: impl IntoIterator<Item = &'a meetsift_core::Meeting>) -> Vec<&'a str> {
    meetings
        .into_iter()
        .map(|meeting| meeting.id.as_str())
        .collect()
}

#[test]
fn grouping_partitions_by_score_in_source_order() {
    let service = service();
    let groups = service.grouped_by_relevance();

    assert_eq!(ids(groups.high.iter().copied()), vec!["m1", "m2", "m5"]);
    assert_eq!(ids(groups.medium.iter().copied()), vec!["m3"]);
    assert_eq!(ids(groups.low.iter().copied()), vec!["m4", "m6"]);
    assert_eq!(groups.len(), service.meetings().len());

    for score in RelevanceScore::ALL {
        assert!(groups
            .get(score)
            .iter()
            .all(|meeting| meeting.relevance_score == score));
    }
}

#[test]
fn grouping_keeps_declined_and_archived_meetings() {
    let mut service = service();
    service.apply_action("m1", MeetingAction::Decline).unwrap();
    service.apply_action("m4", MeetingAction::Archive).unwrap();

    let groups = group_by_relevance(service.meetings());
    assert_eq!(ids(groups.high.iter().copied()), vec!["m1", "m2", "m5"]);
    assert_eq!(ids(groups.low.iter().copied()), vec!["m4", "m6"]);
}

#[test]
fn inbox_only_lists_pending_meetings() {
    let mut service = service();
    service.apply_action("m1", MeetingAction::Accept).unwrap();
    service.apply_action("m3", MeetingAction::Decline).unwrap();
    service.apply_action("m6", MeetingAction::Archive).unwrap();

    let inbox = service.inbox();
    assert_eq!(ids(inbox.high.iter().copied()), vec!["m2", "m5"]);
    assert!(inbox.medium.is_empty());
    assert_eq!(ids(inbox.low.iter().copied()), vec!["m4"]);
}

#[test]
fn empty_criteria_returns_everything_in_order() {
    let service = service();
    let all = filter_by_status(service.meetings(), &StatusCriteria::default());
    assert_eq!(ids(all), vec!["m1", "m2", "m3", "m4", "m5", "m6"]);
}

#[test]
fn absent_flags_compare_as_false() {
    let mut service = service();
    service
        .set_status(
            "m2",
            StatusPatch {
                declined: Some(true),
                ..StatusPatch::default()
            },
        )
        .unwrap();

    let declined = service.meetings_by_status(&StatusCriteria {
        declined: Some(true),
        ..StatusCriteria::default()
    });
    assert_eq!(ids(declined), vec!["m2"]);

    let not_declined = service.meetings_by_status(&StatusCriteria {
        declined: Some(false),
        ..StatusCriteria::default()
    });
    assert_eq!(ids(not_declined), vec!["m1", "m3", "m4", "m5", "m6"]);
}

#[test]
fn criteria_combine_with_and() {
    let mut service = service();
    service
        .set_status(
            "m1",
            StatusPatch {
                declined: Some(true),
                archived: Some(true),
                ..StatusPatch::default()
            },
        )
        .unwrap();
    service.apply_action("m2", MeetingAction::Archive).unwrap();

    let declined_and_archived = service.meetings_by_status(&StatusCriteria {
        declined: Some(true),
        archived: Some(true),
        ..StatusCriteria::default()
    });
    assert_eq!(ids(declined_and_archived), vec!["m1"]);
    assert_eq!(ids(service.archived()), vec!["m1", "m2"]);
}

#[test]
fn upcoming_skips_declined_and_archived_and_sorts_by_time() {
    let mut service = service();
    service.apply_action("m1", MeetingAction::Decline).unwrap();
    service.apply_action("m4", MeetingAction::Archive).unwrap();

    let next = service.upcoming(DEFAULT_UPCOMING_LIMIT);
    assert_eq!(ids(next.iter().copied()), vec!["m2", "m3", "m5"]);
    assert!(next
        .windows(2)
        .all(|pair| pair[0].date_time <= pair[1].date_time));
}

#[test]
fn upcoming_orders_across_insertion_order() {
    let service = service();
    // m4 is inserted after m3 but starts two days earlier.
    let next = upcoming(service.meetings(), 10);
    assert_eq!(ids(next), vec!["m1", "m2", "m4", "m3", "m5", "m6"]);
}

#[test]
fn upcoming_breaks_ties_by_insertion_order() {
    let mut meetings = service().meetings().to_vec();
    let shared = meetings[0].date_time;
    for meeting in &mut meetings {
        meeting.date_time = shared;
    }

    let next = upcoming(&meetings, 4);
    assert_eq!(ids(next), vec!["m1", "m2", "m3", "m4"]);
}

#[test]
fn upcoming_with_zero_limit_is_empty() {
    let service = service();
    assert!(service.upcoming(0).is_empty());
}
