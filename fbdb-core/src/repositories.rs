// Low-level database access traits.
// A repository only stores and loads entities, all
// validation happens before in the corresponding use case.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait FeedbackRepo {
    /// Store a new entry and return it together with its assigned id.
    fn create_feedback(&self, new_entry: NewFeedbackEntry) -> Result<FeedbackEntry>;

    // The order of entries with equal timestamps is unspecified.
    fn all_feedback_by_timestamp_desc(&self) -> Result<Vec<FeedbackEntry>>;

    /// Returns `true` if an entry has actually been deleted.
    fn delete_feedback(&self, id: FeedbackId) -> Result<bool>;
}
