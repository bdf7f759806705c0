use fbdb_entities::{feedback::*, rating::*};

pub trait Rated {
    fn avg_rating(&self) -> AvgRatingValue;
}

impl Rated for [FeedbackEntry] {
    fn avg_rating(&self) -> AvgRatingValue {
        self.iter()
            .fold(AvgRatingValueBuilder::default(), |mut acc, e| {
                acc.add(e.rating);
                acc
            })
            .build()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use fbdb_entities::builders::*;

    fn new_entry(id: i64, rating: u8) -> FeedbackEntry {
        FeedbackEntry::build().id(id).rating(rating).finish()
    }

    #[test]
    fn test_average_rating() {
        let entries1 = [new_entry(1, 5), new_entry(2, 4), new_entry(3, 3)];
        let entries2 = [new_entry(4, 1), new_entry(5, 2)];
        let entries3: [FeedbackEntry; 0] = [];

        assert_eq!(entries1.avg_rating(), 4.0.into());
        assert_eq!(entries2.avg_rating(), 1.5.into());
        assert_eq!(entries3.avg_rating(), 0.0.into());
    }

    #[test]
    fn average_rating_is_within_range() {
        let entries: Vec<_> = (1..=100)
            .map(|i| new_entry(i, (i % 5) as u8 + 1))
            .collect();
        let avg = entries.avg_rating();
        assert!(avg.is_valid());
        assert_eq!(avg, 3.0.into());
    }
}
