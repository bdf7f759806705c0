use std::collections::HashSet;

use super::prelude::*;
use crate::rating::Rated;

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSummary {
    pub total: usize,
    pub avg_rating: AvgRatingValue,
    pub unique_names: usize,
}

pub fn summarize(entries: &[FeedbackEntry]) -> FeedbackSummary {
    let unique_names = entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<HashSet<_>>()
        .len();
    FeedbackSummary {
        total: entries.len(),
        avg_rating: entries.avg_rating(),
        unique_names,
    }
}

pub fn summarize_feedback<R>(repo: &R) -> Result<FeedbackSummary>
where
    R: FeedbackRepo + ?Sized,
{
    let entries = repo.all_feedback_by_timestamp_desc()?;
    Ok(summarize(&entries))
}
