//! Aggregate triage statistics for the dashboard summary row.
//!
//! # Invariants
//! - `pending` counts meetings with none of the three flags set. It is never
//!   derived by subtracting accepted/declined from the total.
//! - `time_saved_hours` rounds half away from zero.

use crate::model::meeting::Meeting;
use serde::Serialize;

const MINUTES_PER_HOUR: u64 = 60;

/// Counts over the whole meeting collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingStats {
    pub total: usize,
    pub accepted: usize,
    pub declined: usize,
    pub pending: usize,
    /// Declined meeting minutes converted to whole hours.
    pub time_saved_hours: u64,
}

pub fn compute_stats(meetings: &[Meeting]) -> MeetingStats {
    let mut stats = MeetingStats {
        total: meetings.len(),
        ..MeetingStats::default()
    };
    let mut declined_minutes: u64 = 0;

    for meeting in meetings {
        if meeting.accepted() {
            stats.accepted += 1;
        }
        if meeting.declined() {
            stats.declined += 1;
            declined_minutes += u64::from(meeting.duration);
        }
        if !meeting.accepted() && !meeting.declined() && !meeting.archived() {
            stats.pending += 1;
        }
    }

    stats.time_saved_hours = minutes_to_rounded_hours(declined_minutes);
    stats
}

fn minutes_to_rounded_hours(minutes: u64) -> u64 {
    (minutes + MINUTES_PER_HOUR / 2) / MINUTES_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::minutes_to_rounded_hours;

    #[test]
    fn rounding_goes_half_up() {
        assert_eq!(minutes_to_rounded_hours(0), 0);
        assert_eq!(minutes_to_rounded_hours(29), 0);
        assert_eq!(minutes_to_rounded_hours(30), 1);
        assert_eq!(minutes_to_rounded_hours(89), 1);
        assert_eq!(minutes_to_rounded_hours(90), 2);
        assert_eq!(minutes_to_rounded_hours(105), 2);
    }
}
