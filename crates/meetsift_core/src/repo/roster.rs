//! Read-only current user and team roster.

use crate::model::people::{TeamMember, User};

/// Fixed current user plus the team directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    current_user: User,
    members: Vec<TeamMember>,
}

impl Roster {
    pub fn new(current_user: User, members: Vec<TeamMember>) -> Self {
        Self {
            current_user,
            members,
        }
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    /// Team names offered by the directory's team picker.
    pub fn current_user_teams(&self) -> &[String] {
        &self.current_user.teams
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn find_member(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Whole roster for `None`, otherwise members whose teams contain `team`
    /// exactly. Roster order is preserved.
    pub fn members_by_team(&self, team: Option<&str>) -> Vec<&TeamMember> {
        match team {
            None => self.members.iter().collect(),
            Some(team) => self
                .members
                .iter()
                .filter(|member| member.is_in_team(team))
                .collect(),
        }
    }
}
