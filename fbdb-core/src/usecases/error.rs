use crate::{repositories, util::validate::FeedbackInvalidation};
use fbdb_entities::{id::FeedbackIdParseError, rating::RatingValueError, time::SubmittedAtParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is missing")]
    Name,
    #[error("The relationship is missing")]
    Relationship,
    #[error("The mood is missing")]
    Mood,
    #[error("The message is empty")]
    Message,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid timestamp")]
    Timestamp,
    #[error("Missing id")]
    MissingId,
    #[error("Invalid id")]
    InvalidId,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// Errors caused by the caller's input, as opposed to
    /// failures of the underlying store.
    pub const fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::Repo(_))
    }
}

impl From<RatingValueError> for Error {
    fn from(_: RatingValueError) -> Self {
        Self::RatingValue
    }
}

impl From<SubmittedAtParseError> for Error {
    fn from(_: SubmittedAtParseError) -> Self {
        Self::Timestamp
    }
}

impl From<FeedbackIdParseError> for Error {
    fn from(_: FeedbackIdParseError) -> Self {
        Self::InvalidId
    }
}

impl From<FeedbackInvalidation> for Error {
    fn from(err: FeedbackInvalidation) -> Self {
        match err {
            FeedbackInvalidation::Name => Self::Name,
            FeedbackInvalidation::Relationship => Self::Relationship,
            FeedbackInvalidation::Mood => Self::Mood,
            FeedbackInvalidation::Message => Self::Message,
        }
    }
}
