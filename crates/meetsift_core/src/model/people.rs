//! Current user and team roster records.
//!
//! Both are seeded once and read-only afterwards.

use serde::{Deserialize, Serialize};

/// The person triaging their invitations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Free-text job role.
    pub role: String,
    pub teams: Vec<String>,
    pub projects: Vec<String>,
}

/// Presence indicator shown in the team directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Online,
    Offline,
    Away,
}

/// One entry in the fixed team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Short display label, usually initials.
    pub avatar: String,
    pub status: PresenceStatus,
    pub teams: Vec<String>,
}

impl TeamMember {
    /// Exact, case-sensitive team membership check.
    pub fn is_in_team(&self, team: &str) -> bool {
        self.teams.iter().any(|name| name == team)
    }
}
