//! Domain model for meeting triage.
//!
//! # Responsibility
//! - Define the meeting, user and roster records the core operates on.
//! - Keep status derivation in one place so every view agrees.
//!
//! # Invariants
//! - Every meeting is identified by a stable `MeetingId`.
//! - Relevance is static data; nothing in core recomputes it.

pub mod meeting;
pub mod people;
pub mod status;
