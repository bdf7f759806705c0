#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// The column `timestamp_ms` stores the client-declared
// timestamp as unix timestamp in **milli**seconds and is
// only used for sorting. The original text is stored in
// the column `timestamp`.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = feedbacks)]
pub struct NewFeedback<'a> {
    pub name: &'a str,
    pub relationship: &'a str,
    pub mood: &'a str,
    pub message: &'a str,
    pub rating: i16,
    pub timestamp: &'a str,
    pub timestamp_ms: i64,
}

#[derive(Queryable)]
pub struct Feedback {
    pub id: i64,
    pub name: String,
    pub relationship: String,
    pub mood: String,
    pub message: String,
    pub rating: i16,
    pub timestamp: String,
    pub timestamp_ms: i64,
}
