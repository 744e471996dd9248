//! Derived-view queries over a meeting collection.
//!
//! # Invariants
//! - Queries never mutate and never fail; empty input yields empty output.
//! - Output preserves source order.

use crate::model::meeting::{Meeting, RelevanceScore};
use crate::model::status::StatusCriteria;

/// Meetings partitioned by relevance tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelevanceGroups<'a> {
    pub high: Vec<&'a Meeting>,
    pub medium: Vec<&'a Meeting>,
    pub low: Vec<&'a Meeting>,
}

impl<'a> RelevanceGroups<'a> {
    pub fn get(&self, score: RelevanceScore) -> &[&'a Meeting] {
        match score {
            RelevanceScore::High => &self.high,
            RelevanceScore::Medium => &self.medium,
            RelevanceScore::Low => &self.low,
        }
    }

    /// Total meetings across all tiers.
    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions meetings by `relevance_score`. No status filtering is applied.
pub fn group_by_relevance<'a, I>(meetings: I) -> RelevanceGroups<'a>
where
    I: IntoIterator<Item = &'a Meeting>,
{
    let mut groups = RelevanceGroups::default();
    for meeting in meetings {
        match meeting.relevance_score {
            RelevanceScore::High => groups.high.push(meeting),
            RelevanceScore::Medium => groups.medium.push(meeting),
            RelevanceScore::Low => groups.low.push(meeting),
        }
    }
    groups
}

/// Meetings whose flags equal every provided criterion.
pub fn filter_by_status<'a>(meetings: &'a [Meeting], criteria: &StatusCriteria) -> Vec<&'a Meeting> {
    meetings
        .iter()
        .filter(|meeting| criteria.matches(meeting))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::group_by_relevance;

    #[test]
    fn grouping_empty_input_yields_empty_groups() {
        let empty: [crate::model::meeting::Meeting; 0] = [];
        let groups = group_by_relevance(&empty);
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
    }
}
