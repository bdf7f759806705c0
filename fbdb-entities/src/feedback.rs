use crate::{id::*, rating::*, time::*};

/// A single, persisted feedback submission.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub id           : FeedbackId,
    pub name         : String,
    pub relationship : String,
    pub mood         : String,
    pub message      : String,
    pub rating       : RatingValue,
    pub timestamp    : SubmittedAt,
}

/// A validated feedback submission that has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedbackEntry {
    pub name         : String,
    pub relationship : String,
    pub mood         : String,
    pub message      : String,
    pub rating       : RatingValue,
    pub timestamp    : SubmittedAt,
}

impl NewFeedbackEntry {
    pub fn into_entry(self, id: FeedbackId) -> FeedbackEntry {
        let Self {
            name,
            relationship,
            mood,
            message,
            rating,
            timestamp,
        } = self;
        FeedbackEntry {
            id,
            name,
            relationship,
            mood,
            message,
            rating,
            timestamp,
        }
    }
}
