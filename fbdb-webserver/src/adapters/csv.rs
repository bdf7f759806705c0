use fbdb_core::entities::FeedbackEntry;
use serde::Serialize;

/// Column names in the order of [`FeedbackRecord`]'s fields.
pub const HEADER: [&str; 7] = [
    "id",
    "name",
    "relationship",
    "mood",
    "message",
    "rating",
    "timestamp",
];

#[derive(Debug, Serialize)]
pub struct FeedbackRecord {
    pub id: i64,
    pub name: String,
    pub relationship: String,
    pub mood: String,
    pub message: String,
    pub rating: u8,
    pub timestamp: String,
}

impl From<FeedbackEntry> for FeedbackRecord {
    fn from(from: FeedbackEntry) -> Self {
        let FeedbackEntry {
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
