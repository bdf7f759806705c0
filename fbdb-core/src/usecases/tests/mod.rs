use std::cell::{Cell, RefCell};

use super::*;
use crate::{
    entities::*,
    repositories::{Error as RepoError, FeedbackRepo},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub entries: RefCell<Vec<FeedbackEntry>>,
    last_id: Cell<i64>,
}

impl FeedbackRepo for MockDb {
    fn create_feedback(&self, new_entry: NewFeedbackEntry) -> RepoResult<FeedbackEntry> {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        let entry = new_entry.into_entry(id.into());
        self.entries.borrow_mut().push(entry.clone());
        Ok(entry)
    }

    fn all_feedback_by_timestamp_desc(&self) -> RepoResult<Vec<FeedbackEntry>> {
        let mut entries = self.entries.borrow().clone();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    fn delete_feedback(&self, id: FeedbackId) -> RepoResult<bool> {
        let mut entries = self.entries.borrow_mut();
        let len_before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() < len_before)
    }
}

/// A store that is not reachable at all.
#[derive(Debug, Default)]
pub struct UnavailableDb;

impl FeedbackRepo for UnavailableDb {
    fn create_feedback(&self, _: NewFeedbackEntry) -> RepoResult<FeedbackEntry> {
        Err(anyhow::anyhow!("connection refused").into())
    }
    fn all_feedback_by_timestamp_desc(&self) -> RepoResult<Vec<FeedbackEntry>> {
        Err(anyhow::anyhow!("connection refused").into())
    }
    fn delete_feedback(&self, _: FeedbackId) -> RepoResult<bool> {
        Err(anyhow::anyhow!("connection refused").into())
    }
}

fn new_feedback(name: &str, rating: i64, timestamp: &str) -> NewFeedback {
    NewFeedback {
        name: name.into(),
        relationship: "Best Friend".into(),
        mood: "😊".into(),
        message: "Great!".into(),
        rating,
        timestamp: timestamp.into(),
    }
}

#[test]
fn create_returns_submitted_fields_and_new_id() {
    let db = MockDb::default();
    let e = create_feedback(&db, new_feedback("Ana", 5, "2024-01-01T00:00:00Z")).unwrap();
    assert_eq!(FeedbackId::new(1), e.id);
    assert_eq!("Ana", e.name);
    assert_eq!("Best Friend", e.relationship);
    assert_eq!("😊", e.mood);
    assert_eq!("Great!", e.message);
    assert_eq!(5, u8::from(e.rating));
    assert_eq!("2024-01-01T00:00:00Z", e.timestamp.as_str());

    let e2 = create_feedback(&db, new_feedback("Ana", 5, "2024-01-01T00:00:00Z")).unwrap();
    assert_ne!(e.id, e2.id);
    assert_eq!(2, db.entries.borrow().len());
}

#[test]
fn create_keeps_strings_verbatim() {
    let db = MockDb::default();
    let mut f = new_feedback("  Ana ", 3, "2024-01-01T02:00:00+02:00");
    f.message = " multi\nline ".into();
    let e = create_feedback(&db, f).unwrap();
    assert_eq!("  Ana ", e.name);
    assert_eq!(" multi\nline ", e.message);
    assert_eq!("2024-01-01T02:00:00+02:00", e.timestamp.as_str());
}

#[test]
fn reject_invalid_feedback() {
    let db = MockDb::default();
    for rating in [0, 6, -1, 1000] {
        let err = create_feedback(&db, new_feedback("Ana", rating, "2024-01-01")).unwrap_err();
        assert!(matches!(err, Error::RatingValue));
        assert!(err.is_invalid_input());
    }
    let err = create_feedback(&db, new_feedback("", 3, "2024-01-01")).unwrap_err();
    assert!(matches!(err, Error::Name));
    let err = create_feedback(&db, new_feedback("Ana", 3, "tomorrow")).unwrap_err();
    assert!(matches!(err, Error::Timestamp));
    let mut f = new_feedback("Ana", 3, "2024-01-01");
    f.message = "   ".into();
    assert!(matches!(create_feedback(&db, f), Err(Error::Message)));
    let mut f = new_feedback("Ana", 3, "2024-01-01");
    f.mood = "".into();
    assert!(matches!(create_feedback(&db, f), Err(Error::Mood)));
    let mut f = new_feedback("Ana", 3, "2024-01-01");
    f.relationship = "".into();
    assert!(matches!(create_feedback(&db, f), Err(Error::Relationship)));
    assert!(db.entries.borrow().is_empty());
}

#[test]
fn list_most_recent_first() {
    let db = MockDb::default();
    create_feedback(&db, new_feedback("Jan", 4, "2024-01-01")).unwrap();
    create_feedback(&db, new_feedback("Feb", 4, "2024-02-01")).unwrap();
    create_feedback(&db, new_feedback("Mar", 4, "2024-03-01T10:00:00+01:00")).unwrap();
    let entries = list_feedback(&db).unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(vec!["Mar", "Feb", "Jan"], names);
    assert!(entries
        .windows(2)
        .all(|pair| pair[0].timestamp >= pair[1].timestamp));
}

#[test]
fn list_empty_store() {
    let db = MockDb::default();
    assert!(list_feedback(&db).unwrap().is_empty());
}

#[test]
fn delete_is_idempotent() {
    let db = MockDb::default();
    let a = create_feedback(&db, new_feedback("A", 1, "2024-01-01")).unwrap();
    let b = create_feedback(&db, new_feedback("B", 2, "2024-01-02")).unwrap();

    delete_feedback(&db, &a.id.to_string()).unwrap();
    let entries = list_feedback(&db).unwrap();
    assert_eq!(1, entries.len());
    assert_eq!(b.id, entries[0].id);

    delete_feedback(&db, &a.id.to_string()).unwrap();
    assert_eq!(1, list_feedback(&db).unwrap().len());

    delete_feedback(&db, "999").unwrap();
    assert_eq!(1, list_feedback(&db).unwrap().len());
}

#[test]
fn delete_with_invalid_id() {
    let db = MockDb::default();
    assert!(matches!(delete_feedback(&db, "abc"), Err(Error::InvalidId)));
    assert!(matches!(delete_feedback(&db, ""), Err(Error::InvalidId)));
}

#[test]
fn summarize_entries() {
    let db = MockDb::default();
    let empty = summarize_feedback(&db).unwrap();
    assert_eq!(0, empty.total);
    assert_eq!(0.0, f64::from(empty.avg_rating));
    assert_eq!(0, empty.unique_names);

    create_feedback(&db, new_feedback("Ana", 5, "2024-01-01")).unwrap();
    create_feedback(&db, new_feedback("Ana", 4, "2024-01-02")).unwrap();
    create_feedback(&db, new_feedback("Ben", 3, "2024-01-03")).unwrap();
    let summary = summarize_feedback(&db).unwrap();
    assert_eq!(3, summary.total);
    assert_eq!(4.0, f64::from(summary.avg_rating));
    assert_eq!(2, summary.unique_names);
}

#[test]
fn store_failures_are_not_invalid_input() {
    let db = UnavailableDb;
    let err = create_feedback(&db, new_feedback("Ana", 5, "2024-01-01")).unwrap_err();
    assert!(matches!(err, Error::Repo(_)));
    assert!(!err.is_invalid_input());
    assert!(matches!(list_feedback(&db), Err(Error::Repo(_))));
    assert!(matches!(delete_feedback(&db, "1"), Err(Error::Repo(_))));
    // Invalid input is rejected before the store is accessed
    assert!(matches!(
        create_feedback(&db, new_feedback("Ana", 9, "2024-01-01")),
        Err(Error::RatingValue)
    ));
}
