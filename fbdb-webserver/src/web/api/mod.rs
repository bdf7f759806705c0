use std::{fmt::Display, result};

use fbdb_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::{ContentType, Header, Status},
    patch, post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::adapters::{self, json};
use fbdb_core::usecases::{self, Error as ParameterError};

mod error;
mod export;
mod feedback;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   feedback   --- //
        feedback::post_feedback,
        feedback::get_feedback,
        feedback::delete_feedback,
        feedback::put_feedback,
        feedback::patch_feedback,
        feedback::get_feedback_stats,
        // ---   export   --- //
        export::json_export,
        export::csv_export,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display + ?Sized>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let error = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        error,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
