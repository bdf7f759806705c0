use super::json_error_response;
use anyhow::anyhow;
pub use fbdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use std::{io, string};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(ParameterError),
    /// A failure of the underlying store.
    ///
    /// Only the message is exposed to clients.
    #[error("{message}")]
    Repo {
        message: &'static str,
        #[source]
        source: RepoError,
    },
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Replaces the details of store failures with `message`.
    pub fn or_failed(message: &'static str) -> impl FnOnce(ParameterError) -> Self {
        move |err| match err {
            ParameterError::Repo(source) => Self::Repo { message, source },
            err => Self::Parameter(err),
        }
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::or_failed("Internal server error")(err)
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<string::FromUtf8Error> for Error {
    fn from(err: string::FromUtf8Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl<T: io::Write> From<csv::IntoInnerError<csv::Writer<T>>> for Error {
    fn from(err: csv::IntoInnerError<csv::Writer<T>>) -> Self {
        Self::Other(anyhow!("{err}"))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl From<time::error::Format> for Error {
    fn from(err: time::error::Format) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Parameter(err) => {
                debug!("Invalid request parameter: {err}");
                json_error_response(req, &err, Status::BadRequest)
            }
            Error::Repo { message, source } => {
                error!("{message}: {source}");
                json_error_response(req, message, Status::InternalServerError)
            }
            err @ Error::MethodNotAllowed => {
                json_error_response(req, &err, Status::MethodNotAllowed)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, "Internal server error", Status::InternalServerError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_details_of_store_failures() {
        let err = ParameterError::Repo(RepoError::Other(anyhow!("disk I/O error")));
        let err = Error::or_failed("Failed to save feedback")(err);
        assert_eq!("Failed to save feedback", err.to_string());
        assert!(matches!(err, Error::Repo { .. }));
    }

    #[test]
    fn keep_invalid_input() {
        let err = Error::or_failed("Failed to save feedback")(ParameterError::RatingValue);
        assert!(matches!(err, Error::Parameter(ParameterError::RatingValue)));
        assert_eq!("Rating value out of range", err.to_string());
    }
}
