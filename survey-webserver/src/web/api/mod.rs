use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};
use survey_boundary::Error as JsonErrorResponse;

use super::guards::*;
use crate::{adapters::json, web::sqlite};
use survey_application::prelude as flows;
use survey_core::usecases;

mod count;
mod error;
mod identifiers;
mod surveys;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   surveys   --- //
        surveys::post_survey_response,
        surveys::get_survey_response,
        // ---   identifiers   --- //
        identifiers::post_identifier_check,
        // ---   count   --- //
        count::get_count_survey_responses,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
