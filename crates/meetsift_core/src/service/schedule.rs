//! Time-ordered projections: the dashboard's upcoming list and the calendar.
//!
//! # Invariants
//! - Sorting is stable; equal timestamps keep source order.
//! - Calendar days are UTC dates.

use crate::model::meeting::Meeting;
use chrono::NaiveDate;

/// Size of the dashboard's upcoming-meetings summary.
pub const DEFAULT_UPCOMING_LIMIT: usize = 3;

/// Next meetings that are neither declined nor archived, earliest first,
/// capped at `limit`.
pub fn upcoming(meetings: &[Meeting], limit: usize) -> Vec<&Meeting> {
    let mut candidates: Vec<&Meeting> = meetings
        .iter()
        .filter(|meeting| !meeting.declined() && !meeting.archived())
        .collect();
    candidates.sort_by_key(|meeting| meeting.date_time);
    candidates.truncate(limit);
    candidates
}

/// Whether a meeting shows up on the calendar: accepted, not declined, not
/// archived.
pub fn is_on_calendar(meeting: &Meeting) -> bool {
    meeting.accepted() && !meeting.declined() && !meeting.archived()
}

/// Calendar meetings starting on `day`, in source order.
pub fn meetings_on_day(meetings: &[Meeting], day: NaiveDate) -> Vec<&Meeting> {
    meetings
        .iter()
        .filter(|meeting| is_on_calendar(meeting) && meeting.date_time.date_naive() == day)
        .collect()
}

/// Sorted, de-duplicated days carrying at least one calendar meeting.
pub fn meeting_days(meetings: &[Meeting]) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = meetings
        .iter()
        .filter(|meeting| is_on_calendar(meeting))
        .map(|meeting| meeting.date_time.date_naive())
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}
