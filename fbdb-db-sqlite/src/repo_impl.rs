use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::Error as DieselError,
};

use fbdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

type Result<T> = std::result::Result<T, repo::Error>;

define_sql_function! { fn last_insert_rowid() -> BigInt; }

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn load_feedback_entry(feedback: models::Feedback) -> Result<FeedbackEntry> {
    let models::Feedback {
        id,
        name,
        relationship,
        mood,
        message,
        rating,
        timestamp,
        timestamp_ms: _,
    } = feedback;
    let rating = RatingValue::try_from(i64::from(rating))
        .map_err(|err| anyhow!("Invalid rating of feedback {id}: {err}"))?;
    let timestamp = timestamp
        .parse::<SubmittedAt>()
        .map_err(|err| anyhow!("Invalid timestamp of feedback {id}: {err}"))?;
    Ok(FeedbackEntry {
        id: id.into(),
        name,
        relationship,
        mood,
        message,
        rating,
        timestamp,
    })
}

fn create_feedback(
    conn: &mut SqliteConnection,
    new_entry: NewFeedbackEntry,
) -> Result<FeedbackEntry> {
    let NewFeedbackEntry {
        name,
        relationship,
        mood,
        message,
        rating,
        timestamp,
    } = &new_entry;
    let new_feedback = models::NewFeedback {
        name,
        relationship,
        mood,
        message,
        rating: (*rating).into(),
        timestamp: timestamp.as_str(),
        timestamp_ms: timestamp.unix_timestamp_millis(),
    };
    let id = conn
        .transaction::<_, DieselError, _>(|conn| {
            diesel::insert_into(schema::feedbacks::table)
                .values(&new_feedback)
                .execute(conn)?;
            diesel::select(last_insert_rowid()).get_result::<i64>(conn)
        })
        .map_err(from_diesel_err)?;
    Ok(new_entry.into_entry(id.into()))
}

fn load_all_feedback_by_timestamp_desc(conn: &mut SqliteConnection) -> Result<Vec<FeedbackEntry>> {
    use schema::feedbacks::dsl;
    schema::feedbacks::table
        .order_by(dsl::timestamp_ms.desc())
        .load::<models::Feedback>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_feedback_entry)
        .collect()
}

fn delete_feedback(conn: &mut SqliteConnection, id: FeedbackId) -> Result<bool> {
    use schema::feedbacks::dsl;
    let count = diesel::delete(schema::feedbacks::table.filter(dsl::id.eq(i64::from(id))))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

impl<'a> FeedbackRepo for DbReadWrite<'a> {
    fn create_feedback(&self, new_entry: NewFeedbackEntry) -> Result<FeedbackEntry> {
        create_feedback(&mut self.conn.borrow_mut(), new_entry)
    }
    fn all_feedback_by_timestamp_desc(&self) -> Result<Vec<FeedbackEntry>> {
        load_all_feedback_by_timestamp_desc(&mut self.conn.borrow_mut())
    }
    fn delete_feedback(&self, id: FeedbackId) -> Result<bool> {
        delete_feedback(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> FeedbackRepo for DbReadOnly<'a> {
    fn create_feedback(&self, _new_entry: NewFeedbackEntry) -> Result<FeedbackEntry> {
        Err(anyhow!("Cannot create feedback with read-only access").into())
    }
    fn all_feedback_by_timestamp_desc(&self) -> Result<Vec<FeedbackEntry>> {
        load_all_feedback_by_timestamp_desc(&mut self.conn.borrow_mut())
    }
    fn delete_feedback(&self, _id: FeedbackId) -> Result<bool> {
        Err(anyhow!("Cannot delete feedback with read-only access").into())
    }
}

// Reads share the connection pool while writes acquire
// it exclusively for the duration of a single operation.
impl FeedbackRepo for Connections {
    fn create_feedback(&self, new_entry: NewFeedbackEntry) -> Result<FeedbackEntry> {
        let db = self.exclusive()?;
        db.create_feedback(new_entry)
    }
    fn all_feedback_by_timestamp_desc(&self) -> Result<Vec<FeedbackEntry>> {
        let db = self.shared()?;
        db.all_feedback_by_timestamp_desc()
    }
    fn delete_feedback(&self, id: FeedbackId) -> Result<bool> {
        let db = self.exclusive()?;
        db.delete_feedback(id)
    }
}
