use super::prelude::*;

/// Deleting a non-existent entry is not an error.
pub fn delete_feedback<R>(repo: &R, id: &str) -> Result<()>
where
    R: FeedbackRepo + ?Sized,
{
    let id = id.parse::<FeedbackId>()?;
    if repo.delete_feedback(id)? {
        log::info!("Deleted feedback entry {id}");
    } else {
        log::debug!("Feedback entry {id} does not exist");
    }
    Ok(())
}
