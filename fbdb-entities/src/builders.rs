pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{feedback_builder::*, new_feedback_builder::*};

pub mod feedback_builder {

    use super::*;
    use crate::{feedback::*, id::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct FeedbackEntryBuild {
        entry: FeedbackEntry,
    }

    impl FeedbackEntryBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.entry.id = FeedbackId::new(id);
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.entry.name = name.into();
            self
        }
        pub fn relationship(mut self, relationship: &str) -> Self {
            self.entry.relationship = relationship.into();
            self
        }
        pub fn mood(mut self, mood: &str) -> Self {
            self.entry.mood = mood.into();
            self
        }
        pub fn message(mut self, message: &str) -> Self {
            self.entry.message = message.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.entry.rating = RatingValue::new(rating);
            self
        }
        pub fn timestamp(mut self, timestamp: &str) -> Self {
            self.entry.timestamp = timestamp.parse().unwrap();
            self
        }
        pub fn finish(self) -> FeedbackEntry {
            self.entry
        }
    }

    impl Builder for FeedbackEntry {
        type Build = FeedbackEntryBuild;
        fn build() -> Self::Build {
            Self::Build {
                entry: FeedbackEntry {
                    id: FeedbackId::new(1),
                    name: "Ana".into(),
                    relationship: "Best Friend".into(),
                    mood: "😊".into(),
                    message: "Great!".into(),
                    rating: RatingValue::max(),
                    timestamp: "2024-01-01T00:00:00Z".parse::<SubmittedAt>().unwrap(),
                },
            }
        }
    }
}

pub mod new_feedback_builder {

    use super::*;
    use crate::{feedback::*, rating::*};

    #[derive(Debug)]
    pub struct NewFeedbackEntryBuild {
        new_entry: NewFeedbackEntry,
    }

    impl NewFeedbackEntryBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.new_entry.name = name.into();
            self
        }
        pub fn message(mut self, message: &str) -> Self {
            self.new_entry.message = message.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.new_entry.rating = RatingValue::new(rating);
            self
        }
        pub fn timestamp(mut self, timestamp: &str) -> Self {
            self.new_entry.timestamp = timestamp.parse().unwrap();
            self
        }
        pub fn finish(self) -> NewFeedbackEntry {
            self.new_entry
        }
    }

    impl Builder for NewFeedbackEntry {
        type Build = NewFeedbackEntryBuild;
        fn build() -> Self::Build {
            let FeedbackEntry {
                name,
                relationship,
                mood,
                message,
                rating,
                timestamp,
                ..
            } = FeedbackEntry::build().finish();
            Self::Build {
                new_entry: NewFeedbackEntry {
                    name,
                    relationship,
                    mood,
                    message,
                    rating,
                    timestamp,
                },
            }
        }
    }
}
