//! Meeting status vocabulary: derived status, partial flag updates, filter
//! criteria and user-facing triage actions.
//!
//! # Invariants
//! - `MeetingStatus` is always derived, never stored.
//! - `StatusPatch` is merged into a meeting; absent fields are left unchanged.
//! - `StatusCriteria` treats absent meeting flags as `false`.

use crate::model::meeting::Meeting;
use serde::{Deserialize, Serialize};

/// Mutually exclusive display status derived from the three flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    /// No flag set; awaiting a response.
    Pending,
    Accepted,
    Declined,
    Archived,
}

impl MeetingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Archived => "archived",
        }
    }
}

/// Partial overwrite of status flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPatch {
    #[serde(default, rename = "isAccepted", skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,
    #[serde(default, rename = "isDeclined", skip_serializing_if = "Option::is_none")]
    pub declined: Option<bool>,
    #[serde(default, rename = "isArchived", skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl StatusPatch {
    /// Returns whether the patch would leave every flag unchanged.
    pub fn is_empty(&self) -> bool {
        self.accepted.is_none() && self.declined.is_none() && self.archived.is_none()
    }
}

/// Exact-match filter over status flags. Omitted fields match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCriteria {
    pub accepted: Option<bool>,
    pub declined: Option<bool>,
    pub archived: Option<bool>,
}

impl StatusCriteria {
    /// Criteria selecting archived meetings.
    pub fn archived() -> Self {
        Self {
            archived: Some(true),
            ..Self::default()
        }
    }

    pub fn matches(&self, meeting: &Meeting) -> bool {
        self.accepted.map_or(true, |want| meeting.accepted() == want)
            && self.declined.map_or(true, |want| meeting.declined() == want)
            && self.archived.map_or(true, |want| meeting.archived() == want)
    }
}

/// Triage action offered by the dashboard buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingAction {
    Accept,
    Decline,
    Archive,
}

impl MeetingAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Decline => "decline",
            Self::Archive => "archive",
        }
    }

    /// Full three-flag patch where only this action's flag is `true`.
    pub fn patch(self) -> StatusPatch {
        StatusPatch {
            accepted: Some(self == Self::Accept),
            declined: Some(self == Self::Decline),
            archived: Some(self == Self::Archive),
        }
    }
}

/// Actions the dashboard offers for a meeting in its current state.
pub fn available_actions(meeting: &Meeting) -> Vec<MeetingAction> {
    match meeting.status() {
        MeetingStatus::Pending => vec![
            MeetingAction::Accept,
            MeetingAction::Decline,
            MeetingAction::Archive,
        ],
        MeetingStatus::Accepted => vec![MeetingAction::Decline, MeetingAction::Archive],
        MeetingStatus::Declined if meeting.archived() => vec![MeetingAction::Accept],
        MeetingStatus::Declined => vec![MeetingAction::Accept, MeetingAction::Archive],
        MeetingStatus::Archived => Vec::new(),
    }
}
