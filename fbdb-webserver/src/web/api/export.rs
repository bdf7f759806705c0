use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

use super::*;

const FILE_NAME_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

#[derive(rocket::Responder)]
#[response(content_type = "json")]
pub struct JsonAttachment {
    body: String,
    disposition: Header<'static>,
}

impl JsonAttachment {
    fn new(body: String, file_name: &str) -> Self {
        let disposition = Header::new(
            "Content-Disposition",
            format!("attachment; filename=\"{file_name}\""),
        );
        Self { body, disposition }
    }
}

fn export_file_name() -> result::Result<String, ApiError> {
    let today = OffsetDateTime::now_utc().date();
    Ok(format!(
        "feedbacks-{}.json",
        today.format(FILE_NAME_DATE_FORMAT)?
    ))
}

#[get("/export/feedback.json")]
pub fn json_export(db: Db) -> result::Result<JsonAttachment, ApiError> {
    let entries = usecases::list_feedback(&*db)
        .map_err(ApiError::or_failed("Failed to fetch feedbacks"))?;
    let entries: Vec<json::FeedbackEntry> = entries.into_iter().map(Into::into).collect();
    let body = serde_json::to_string_pretty(&entries)?;
    Ok(JsonAttachment::new(body, &export_file_name()?))
}

#[get("/export/feedback.csv")]
pub fn csv_export(db: Db) -> result::Result<(ContentType, String), ApiError> {
    let entries = usecases::list_feedback(&*db)
        .map_err(ApiError::or_failed("Failed to fetch feedbacks"))?;

    let records = entries.into_iter().map(adapters::csv::FeedbackRecord::from);

    let buff: Vec<u8> = vec![];
    // The header is written explicitly to get one even without any records
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(buff);
    wtr.write_record(adapters::csv::HEADER)?;
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    let data = String::from_utf8(wtr.into_inner()?)?;

    Ok((ContentType::CSV, data))
}
