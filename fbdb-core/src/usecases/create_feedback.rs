use super::prelude::*;
use crate::util::validate::Validate;

/// Unvalidated feedback as submitted by a client.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewFeedback {
    pub name         : String,
    pub relationship : String,
    pub mood         : String,
    pub message      : String,
    pub rating       : i64,
    pub timestamp    : String,
}

pub fn prepare_new_feedback(new_feedback: NewFeedback) -> Result<NewFeedbackEntry> {
    let NewFeedback {
        name,
        relationship,
        mood,
        message,
        rating,
        timestamp,
    } = new_feedback;
    let rating = RatingValue::try_from(rating)?;
    let timestamp = timestamp.parse::<SubmittedAt>()?;
    let new_entry = NewFeedbackEntry {
        name,
        relationship,
        mood,
        message,
        rating,
        timestamp,
    };
    new_entry.validate()?;
    Ok(new_entry)
}

pub fn create_feedback<R>(repo: &R, new_feedback: NewFeedback) -> Result<FeedbackEntry>
where
    R: FeedbackRepo + ?Sized,
{
    let new_entry = prepare_new_feedback(new_feedback)?;
    let entry = repo.create_feedback(new_entry)?;
    log::info!("Created feedback entry {}", entry.id);
    Ok(entry)
}
