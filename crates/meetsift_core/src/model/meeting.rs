//! Meeting domain model.
//!
//! # Responsibility
//! - Define the canonical meeting invitation record shared by every view.
//! - Derive the single display status from the three independent flags.
//!
//! # Invariants
//! - `id` is stable and never reused for another meeting.
//! - `relevance_score` and `relevance_reason` are fixed at creation.
//! - Status flags are only mutated through `Meeting::apply_patch`.
//! - An absent status flag compares as `false`.

use crate::model::status::{MeetingStatus, StatusPatch};
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Stable identifier for a meeting invitation.
pub type MeetingId = String;

/// Static relevance tier assigned to a meeting by the upstream scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceScore {
    High,
    Medium,
    Low,
}

impl RelevanceScore {
    /// All tiers in inbox display order.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Badge label used by the calendar view.
    pub fn display_label(self) -> &'static str {
        match self {
            Self::High => "Relevant",
            Self::Medium => "Optional",
            Self::Low => "Not Applicable",
        }
    }
}

/// Model-level validation failures for meeting records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingValidationError {
    BlankId,
    BlankSubject,
    ZeroDuration,
    InvalidOrganizerEmail(String),
}

impl Display for MeetingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "meeting id must not be blank"),
            Self::BlankSubject => write!(f, "meeting subject must not be blank"),
            Self::ZeroDuration => write!(f, "meeting duration must be at least one minute"),
            Self::InvalidOrganizerEmail(value) => {
                write!(f, "organizer email is not a valid address: `{value}`")
            }
        }
    }
}

impl Error for MeetingValidationError {}

/// Authored fields of a meeting, everything except identity and status flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingDraft {
    pub subject: String,
    pub organizer: String,
    pub organizer_email: String,
    pub date_time: DateTime<Utc>,
    /// Minutes.
    pub duration: u32,
    pub location: String,
    pub description: String,
    pub attendees: Vec<String>,
    pub relevance_score: RelevanceScore,
    pub relevance_reason: String,
    pub tags: Vec<String>,
}

/// Canonical meeting invitation record.
///
/// Serialized with camelCase keys; absent status flags are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMeeting")]
pub struct Meeting {
    pub id: MeetingId,
    pub subject: String,
    pub organizer: String,
    pub organizer_email: String,
    pub date_time: DateTime<Utc>,
    /// Minutes, always positive.
    pub duration: u32,
    pub location: String,
    pub description: String,
    /// Ordered attendee emails. Duplicates are not rejected.
    pub attendees: Vec<String>,
    pub relevance_score: RelevanceScore,
    pub relevance_reason: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_accepted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_declined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
}

impl Meeting {
    /// Creates a meeting with a generated stable ID and no status flags set.
    pub fn new(draft: MeetingDraft) -> Result<Self, MeetingValidationError> {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Creates a meeting with a caller-provided stable ID.
    ///
    /// Used by the seed loader where identity is authored up front.
    pub fn with_id(
        id: impl Into<MeetingId>,
        draft: MeetingDraft,
    ) -> Result<Self, MeetingValidationError> {
        let meeting = Self {
            id: id.into(),
            subject: draft.subject,
            organizer: draft.organizer,
            organizer_email: draft.organizer_email,
            date_time: draft.date_time,
            duration: draft.duration,
            location: draft.location,
            description: draft.description,
            attendees: draft.attendees,
            relevance_score: draft.relevance_score,
            relevance_reason: draft.relevance_reason,
            tags: draft.tags,
            is_accepted: None,
            is_declined: None,
            is_archived: None,
        };
        meeting.validate()?;
        Ok(meeting)
    }

    /// Validates identity, subject, duration and organizer address.
    pub fn validate(&self) -> Result<(), MeetingValidationError> {
        if self.id.trim().is_empty() {
            return Err(MeetingValidationError::BlankId);
        }
        if self.subject.trim().is_empty() {
            return Err(MeetingValidationError::BlankSubject);
        }
        if self.duration == 0 {
            return Err(MeetingValidationError::ZeroDuration);
        }
        if !EMAIL_RE.is_match(&self.organizer_email) {
            return Err(MeetingValidationError::InvalidOrganizerEmail(
                self.organizer_email.clone(),
            ));
        }
        Ok(())
    }

    pub fn accepted(&self) -> bool {
        self.is_accepted.unwrap_or(false)
    }

    pub fn declined(&self) -> bool {
        self.is_declined.unwrap_or(false)
    }

    pub fn archived(&self) -> bool {
        self.is_archived.unwrap_or(false)
    }

    /// Derived display status. See [`classify`].
    pub fn status(&self) -> MeetingStatus {
        classify(self)
    }

    /// Overwrites exactly the flags present in `patch`.
    ///
    /// Flags absent from the patch keep their current value, so contradictory
    /// combinations (accepted and declined) are representable.
    pub fn apply_patch(&mut self, patch: &StatusPatch) {
        if let Some(value) = patch.accepted {
            self.is_accepted = Some(value);
        }
        if let Some(value) = patch.declined {
            self.is_declined = Some(value);
        }
        if let Some(value) = patch.archived {
            self.is_archived = Some(value);
        }
    }

    /// Instant the meeting ends (`date_time + duration`).
    pub fn end_time(&self) -> DateTime<Utc> {
        self.date_time + Duration::minutes(i64::from(self.duration))
    }
}

/// Maps the three status flags to one display status.
///
/// Priority, first match wins: accepted, declined, archived, pending.
pub fn classify(meeting: &Meeting) -> MeetingStatus {
    if meeting.accepted() {
        MeetingStatus::Accepted
    } else if meeting.declined() {
        MeetingStatus::Declined
    } else if meeting.archived() {
        MeetingStatus::Archived
    } else {
        MeetingStatus::Pending
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMeeting {
    id: MeetingId,
    subject: String,
    organizer: String,
    organizer_email: String,
    date_time: DateTime<Utc>,
    duration: u32,
    #[serde(default)]
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    attendees: Vec<String>,
    relevance_score: RelevanceScore,
    #[serde(default)]
    relevance_reason: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    is_accepted: Option<bool>,
    #[serde(default)]
    is_declined: Option<bool>,
    #[serde(default)]
    is_archived: Option<bool>,
}

impl TryFrom<RawMeeting> for Meeting {
    type Error = MeetingValidationError;

    fn try_from(raw: RawMeeting) -> Result<Self, Self::Error> {
        let meeting = Self {
            id: raw.id,
            subject: raw.subject,
            organizer: raw.organizer,
            organizer_email: raw.organizer_email,
            date_time: raw.date_time,
            duration: raw.duration,
            location: raw.location,
            description: raw.description,
            attendees: raw.attendees,
            relevance_score: raw.relevance_score,
            relevance_reason: raw.relevance_reason,
            tags: raw.tags,
            is_accepted: raw.is_accepted,
            is_declined: raw.is_declined,
            is_archived: raw.is_archived,
        };
        meeting.validate()?;
        Ok(meeting)
    }
}
