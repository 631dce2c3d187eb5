use super::json_error_response;
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use survey_application::error::{AppError, BError};
use survey_core::repositories::Error as RepoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
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

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if err.is_store_unavailable() {
                    warn!("Survey store unavailable: {err}");
                    return json_error_response(req, &err, Status::ServiceUnavailable);
                }
                let AppError::Business(business_err) = &err;
                match business_err {
                    BError::Parameter(param_err) => {
                        json_error_response(req, param_err, Status::BadRequest)
                    }
                    BError::Repo(RepoError::NotFound) => {
                        json_error_response(req, business_err, Status::NotFound)
                    }
                    _ => {
                        error!("Error: {err}");
                        json_error_response(req, &err, Status::InternalServerError)
                    }
                }
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
        }
    }
}
