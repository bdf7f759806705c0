use fbdb_entities::feedback::NewFeedbackEntry;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Debug, Error)]
pub enum FeedbackInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Missing relationship")]
    Relationship,
    #[error("Missing mood")]
    Mood,
    #[error("Empty message")]
    Message,
}

impl Validate for NewFeedbackEntry {
    type Error = FeedbackInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        // NOTE:
        // Rating and timestamp are already valid,
        // because they are checked on construction.
        if is_blank(&self.name) {
            return Err(Self::Error::Name);
        }
        if self.relationship.is_empty() {
            return Err(Self::Error::Relationship);
        }
        if self.mood.is_empty() {
            return Err(Self::Error::Mood);
        }
        if is_blank(&self.message) {
            return Err(Self::Error::Message);
        }
        Ok(())
    }
}
