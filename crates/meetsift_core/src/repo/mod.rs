//! Repository layer: the in-memory store and its access contract.
//!
//! # Responsibility
//! - Define the meeting data access contract used by services.
//! - Hold seeded meetings, the current user and the roster for the process
//!   lifetime.
//!
//! # Invariants
//! - Status updates are the only mutation after construction.
//! - Unknown ids surface as `RepoError::NotFound` values, never panics.

pub mod meeting_repo;
pub mod roster;
