//! Core use-case services and derived-view queries.
//!
//! # Responsibility
//! - Turn the raw meeting collection into the views the dashboard renders.
//! - Keep presentation layers decoupled from store details.

pub mod meeting_service;
pub mod queries;
pub mod schedule;
pub mod stats;
