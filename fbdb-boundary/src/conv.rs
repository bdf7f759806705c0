use super::*;
use fbdb_entities as e;

impl From<e::feedback::FeedbackEntry> for FeedbackEntry {
    fn from(from: e::feedback::FeedbackEntry) -> Self {
        let e::feedback::FeedbackEntry {
            id,
            name,
            relationship,
            mood,
            message,
            rating,
            timestamp,
        } = from;
        Self {
            id: id.into(),
            name,
            relationship,
            mood,
            message,
            rating: rating.into(),
            timestamp: timestamp.into_string(),
        }
    }
}
