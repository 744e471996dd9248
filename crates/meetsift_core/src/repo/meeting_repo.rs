//! Meeting repository contract and in-memory store.
//!
//! # Responsibility
//! - Own the authoritative meeting collection for the process lifetime.
//! - Provide identity-stable lookup and the single status mutation path.
//!
//! # Invariants
//! - Construction validates every meeting and rejects duplicate ids.
//! - Insertion order is preserved; queries rely on it for stable output.
//! - Only status flags change after construction.

use crate::model::meeting::{Meeting, MeetingId, MeetingValidationError};
use crate::model::status::StatusPatch;
use log::{debug, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for meeting store construction and updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No meeting carries the requested id.
    NotFound(MeetingId),
    /// Two seeded meetings share one id.
    DuplicateId(MeetingId),
    Validation(MeetingValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "meeting not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate meeting id: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<MeetingValidationError> for RepoError {
    fn from(value: MeetingValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage contract for meeting reads and status updates.
pub trait MeetingRepository {
    /// Returns the stored record, or `None` when the id is unknown.
    fn get_meeting(&self, id: &str) -> Option<&Meeting>;
    /// Returns every meeting in insertion order.
    fn list_meetings(&self) -> &[Meeting];
    /// Merges `patch` into the stored meeting and returns the updated record.
    ///
    /// Unknown ids yield `RepoError::NotFound` and leave the store untouched.
    fn update_status(&mut self, id: &str, patch: &StatusPatch) -> RepoResult<&Meeting>;
}

/// Process-memory meeting store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMeetingRepository {
    meetings: Vec<Meeting>,
}

impl InMemoryMeetingRepository {
    /// Builds a store from seed records.
    ///
    /// # Errors
    /// - `RepoError::Validation` when any meeting fails `Meeting::validate`.
    /// - `RepoError::DuplicateId` when two meetings share an id.
    pub fn from_meetings(meetings: Vec<Meeting>) -> RepoResult<Self> {
        check_seed(&meetings)?;

        info!(
            "event=store_init module=repo status=ok meetings={}",
            meetings.len()
        );
        Ok(Self { meetings })
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

impl MeetingRepository for InMemoryMeetingRepository {
    fn get_meeting(&self, id: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|meeting| meeting.id == id)
    }

    fn list_meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    fn update_status(&mut self, id: &str, patch: &StatusPatch) -> RepoResult<&Meeting> {
        let Some(meeting) = self.meetings.iter_mut().find(|meeting| meeting.id == id) else {
            debug!("event=status_update module=repo status=not_found meeting_id={id}");
            return Err(RepoError::NotFound(id.to_string()));
        };

        meeting.apply_patch(patch);
        debug!(
            "event=status_update module=repo status=ok meeting_id={} derived={}",
            meeting.id,
            meeting.status().as_str()
        );
        Ok(&*meeting)
    }
}

fn check_seed(meetings: &[Meeting]) -> RepoResult<()> {
    let mut seen = HashSet::with_capacity(meetings.len());
    for meeting in meetings {
        meeting.validate()?;
        if !seen.insert(meeting.id.as_str()) {
            return Err(RepoError::DuplicateId(meeting.id.clone()));
        }
    }
    Ok(())
}
