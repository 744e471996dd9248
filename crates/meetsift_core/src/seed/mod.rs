//! Embedded demo dataset.
//!
//! # Responsibility
//! - Decode the static user, roster and meeting definitions shipped with the
//!   crate.
//! - Build a fresh store from them on every call, so tests never share state.
//!
//! # Invariants
//! - Decoding validates each meeting via `Meeting`'s deserializer.
//! - Seeded meetings start with no status flags set.

use crate::model::meeting::Meeting;
use crate::model::people::{TeamMember, User};
use crate::repo::meeting_repo::{InMemoryMeetingRepository, RepoError};
use crate::repo::roster::Roster;
use log::info;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEMO_DATASET_JSON: &str = include_str!("demo.json");

/// Errors from decoding or loading seed data.
#[derive(Debug)]
pub enum SeedError {
    Decode(serde_json::Error),
    Repo(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "invalid seed dataset: {err}"),
            Self::Repo(err) => write!(f, "seed dataset rejected by store: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Decoded seed document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDataset {
    pub current_user: User,
    pub team_members: Vec<TeamMember>,
    pub meetings: Vec<Meeting>,
}

impl SeedDataset {
    /// Decodes a seed document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Splits the dataset into a meeting store and a roster.
    pub fn into_store(self) -> Result<(InMemoryMeetingRepository, Roster), SeedError> {
        let repo = InMemoryMeetingRepository::from_meetings(self.meetings)?;
        let roster = Roster::new(self.current_user, self.team_members);
        info!(
            "event=seed_loaded module=seed status=ok meetings={} members={}",
            repo.len(),
            roster.members().len()
        );
        Ok((repo, roster))
    }
}

/// Decodes the dataset embedded in the crate.
pub fn demo_dataset() -> Result<SeedDataset, SeedError> {
    SeedDataset::from_json(DEMO_DATASET_JSON)
}
