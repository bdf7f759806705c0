use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct FeedbackEntry {
    pub id           : i64,
    pub name         : String,
    pub relationship : String,
    pub mood         : String,
    pub message      : String,
    pub rating       : u8,
    pub timestamp    : String,
}

/// Missing fields are accepted here and rejected
/// later with a more specific validation error.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(default)]
pub struct NewFeedback {
    pub name         : String,
    pub relationship : String,
    pub mood         : String,
    pub message      : String,
    pub rating       : i64,
    pub timestamp    : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct FeedbackStats {
    pub total: u64,
    pub average_rating: f64,
    pub unique_names: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct Success {
    pub success: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{error}"))]
pub struct Error {
    /// The HTTP status code of the response
    pub http_status: u16,
    pub error: String,
}
