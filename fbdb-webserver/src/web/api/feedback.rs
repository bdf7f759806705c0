use super::*;

#[post("/feedback", data = "<new_feedback>")]
pub fn post_feedback(
    db: Db,
    new_feedback: JsonResult<json::NewFeedback>,
) -> Result<json::FeedbackEntry> {
    let new_feedback = new_feedback
        .map_err(|err| {
            log::debug!("Invalid feedback: {:?}", err);
            err
        })?
        .into_inner();
    let new_feedback = json::from_json::new_feedback(new_feedback);
    let entry = usecases::create_feedback(&*db, new_feedback)
        .map_err(ApiError::or_failed("Failed to save feedback"))?;
    Ok(Json(entry.into()))
}

#[get("/feedback")]
pub fn get_feedback(db: Db) -> Result<Vec<json::FeedbackEntry>> {
    let entries = usecases::list_feedback(&*db)
        .map_err(ApiError::or_failed("Failed to fetch feedbacks"))?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[delete("/feedback?<id>")]
pub fn delete_feedback(db: Db, id: Option<&str>) -> Result<json::Success> {
    let id = id.ok_or(ParameterError::MissingId)?;
    usecases::delete_feedback(&*db, id)
        .map_err(ApiError::or_failed("Failed to delete feedback"))?;
    Ok(Json(json::Success { success: true }))
}

// Entries are immutable once submitted.
#[put("/feedback")]
pub fn put_feedback() -> result::Result<(), ApiError> {
    Err(ApiError::MethodNotAllowed)
}

#[patch("/feedback")]
pub fn patch_feedback() -> result::Result<(), ApiError> {
    Err(ApiError::MethodNotAllowed)
}

#[get("/feedback/stats")]
pub fn get_feedback_stats(db: Db) -> Result<json::FeedbackStats> {
    let summary = usecases::summarize_feedback(&*db)
        .map_err(ApiError::or_failed("Failed to fetch feedbacks"))?;
    Ok(Json(json::to_json::feedback_stats(summary)))
}
