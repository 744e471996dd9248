use meetsift_core::{MeetingService, PresenceStatus};

#[test]
fn members_by_team_without_team_returns_full_roster() {
    let service = MeetingService::with_demo_data().unwrap();
    let all = service.members_by_team(None);
    assert_eq!(all.len(), service.roster().members().len());
    assert_eq!(all.len(), 6);
}

#[test]
fn members_by_team_matches_exact_team_name() {
    let service = MeetingService::with_demo_data().unwrap();

    let governance: Vec<&str> = service
        .members_by_team(Some("API Governance"))
        .into_iter()
        .map(|member| member.id.as_str())
        .collect();
    assert_eq!(governance, vec!["t1", "t2", "t4", "t6"]);

    assert!(service.members_by_team(Some("api governance")).is_empty());
    assert!(service.members_by_team(Some("API")).is_empty());
}

#[test]
fn current_user_teams_feed_the_team_picker() {
    let service = MeetingService::with_demo_data().unwrap();
    let roster = service.roster();

    assert_eq!(roster.current_user().name, "Alex Morgan");
    assert_eq!(
        roster.current_user_teams(),
        ["API Governance".to_string(), "Integration".to_string()]
    );
    for team in roster.current_user_teams() {
        assert!(!roster.members_by_team(Some(team)).is_empty());
    }
}

#[test]
fn find_member_reports_presence() {
    let service = MeetingService::with_demo_data().unwrap();
    let member = service.roster().find_member("t2").unwrap();
    assert_eq!(member.status, PresenceStatus::Away);
    assert_eq!(member.avatar, "MR");
    assert!(service.roster().find_member("t99").is_none());
}
