pub use fbdb_boundary::*;

use fbdb_core::usecases;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_feedback(from: NewFeedback) -> usecases::NewFeedback {
        let NewFeedback {
            name,
            relationship,
            mood,
            message,
            rating,
            timestamp,
        } = from;
        usecases::NewFeedback {
            name,
            relationship,
            mood,
            message,
            rating,
            timestamp,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn feedback_stats(from: usecases::FeedbackSummary) -> FeedbackStats {
        let usecases::FeedbackSummary {
            total,
            avg_rating,
            unique_names,
        } = from;
        FeedbackStats {
            total: total as u64,
            average_rating: avg_rating.into(),
            unique_names: unique_names as u64,
        }
    }
}
