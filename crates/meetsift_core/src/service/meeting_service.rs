//! Meeting triage use-case service.
//!
//! # Responsibility
//! - Provide the query and command entry points the dashboard views call.
//! - Route every status change through the repository's single update path.
//!
//! # Invariants
//! - Status updates merge; callers wanting exclusive flags use
//!   `apply_action` or pass all three flags.
//! - Mutations are visible to the very next query.

use crate::model::meeting::Meeting;
use crate::model::people::TeamMember;
use crate::model::status::{MeetingAction, MeetingStatus, StatusCriteria, StatusPatch};
use crate::repo::meeting_repo::{InMemoryMeetingRepository, MeetingRepository, RepoResult};
use crate::repo::roster::Roster;
use crate::seed::{demo_dataset, SeedError};
use crate::service::queries::{filter_by_status, group_by_relevance, RelevanceGroups};
use crate::service::schedule::{meeting_days, meetings_on_day, upcoming};
use crate::service::stats::{compute_stats, MeetingStats};
use chrono::NaiveDate;
use log::{info, warn};

/// Facade over the meeting store and roster.
pub struct MeetingService<R: MeetingRepository> {
    repo: R,
    roster: Roster,
}

impl MeetingService<InMemoryMeetingRepository> {
    /// Builds a service over a fresh copy of the embedded demo dataset.
    pub fn with_demo_data() -> Result<Self, SeedError> {
        let (repo, roster) = demo_dataset()?.into_store()?;
        Ok(Self::new(repo, roster))
    }
}

impl<R: MeetingRepository> MeetingService<R> {
    pub fn new(repo: R, roster: Roster) -> Self {
        Self { repo, roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn meetings(&self) -> &[Meeting] {
        self.repo.list_meetings()
    }

    pub fn get_meeting(&self, id: &str) -> Option<&Meeting> {
        self.repo.get_meeting(id)
    }

    /// Merges `patch` into one meeting's flags.
    ///
    /// Returns `RepoError::NotFound` for unknown ids without touching the store.
    pub fn set_status(&mut self, id: &str, patch: StatusPatch) -> RepoResult<&Meeting> {
        if patch.is_empty() {
            warn!("event=set_status module=service status=noop meeting_id={id}");
        }
        self.repo.update_status(id, &patch)
    }

    /// Applies a dashboard action as an exclusive three-flag update.
    pub fn apply_action(&mut self, id: &str, action: MeetingAction) -> RepoResult<&Meeting> {
        let before = self.repo.get_meeting(id).map(Meeting::status);
        let meeting = self.repo.update_status(id, &action.patch())?;
        info!(
            "event=meeting_action module=service status=ok meeting_id={} action={} from={} to={}",
            meeting.id,
            action.as_str(),
            before.map_or("unknown", MeetingStatus::as_str),
            meeting.status().as_str()
        );
        Ok(meeting)
    }

    pub fn grouped_by_relevance(&self) -> RelevanceGroups<'_> {
        group_by_relevance(self.meetings())
    }

    /// Relevance tiers holding only meetings still awaiting a response.
    pub fn inbox(&self) -> RelevanceGroups<'_> {
        group_by_relevance(
            self.meetings()
                .iter()
                .filter(|meeting| meeting.status() == MeetingStatus::Pending),
        )
    }

    pub fn meetings_by_status(&self, criteria: &StatusCriteria) -> Vec<&Meeting> {
        filter_by_status(self.meetings(), criteria)
    }

    pub fn archived(&self) -> Vec<&Meeting> {
        self.meetings_by_status(&StatusCriteria::archived())
    }

    pub fn upcoming(&self, limit: usize) -> Vec<&Meeting> {
        upcoming(self.meetings(), limit)
    }

    pub fn stats(&self) -> MeetingStats {
        compute_stats(self.meetings())
    }

    pub fn calendar_day(&self, day: NaiveDate) -> Vec<&Meeting> {
        meetings_on_day(self.meetings(), day)
    }

    pub fn calendar_days(&self) -> Vec<NaiveDate> {
        meeting_days(self.meetings())
    }

    pub fn members_by_team(&self, team: Option<&str>) -> Vec<&TeamMember> {
        self.roster.members_by_team(team)
    }
}
