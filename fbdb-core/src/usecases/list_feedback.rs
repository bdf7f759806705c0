use super::prelude::*;

pub fn list_feedback<R>(repo: &R) -> Result<Vec<FeedbackEntry>>
where
    R: FeedbackRepo + ?Sized,
{
    let entries = repo.all_feedback_by_timestamp_desc()?;
    log::debug!("Loaded {} feedback entries", entries.len());
    Ok(entries)
}
