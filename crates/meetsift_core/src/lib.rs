//! Core triage logic for Meetsift.
//! This crate is the single source of truth for meeting status invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::meeting::{
    classify, Meeting, MeetingDraft, MeetingId, MeetingValidationError, RelevanceScore,
};
pub use model::people::{PresenceStatus, TeamMember, User};
pub use model::status::{
    available_actions, MeetingAction, MeetingStatus, StatusCriteria, StatusPatch,
};
pub use repo::meeting_repo::{InMemoryMeetingRepository, MeetingRepository, RepoError, RepoResult};
pub use repo::roster::Roster;
pub use seed::{demo_dataset, SeedDataset, SeedError};
pub use service::meeting_service::MeetingService;
pub use service::queries::{filter_by_status, group_by_relevance, RelevanceGroups};
pub use service::schedule::{
    is_on_calendar, meeting_days, meetings_on_day, upcoming, DEFAULT_UPCOMING_LIMIT,
};
pub use service::stats::{compute_stats, MeetingStats};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
