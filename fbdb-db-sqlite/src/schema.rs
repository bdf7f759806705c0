///////////////////////////////////////////////////////////////////////
// Feedback
///////////////////////////////////////////////////////////////////////

table! {
    feedbacks (id) {
        id -> BigInt,
        name -> Text,
        relationship -> Text,
        mood -> Text,
        message -> Text,
        rating -> SmallInt,
        timestamp -> Text,
        timestamp_ms -> BigInt,
    }
}
