#[macro_use]
extern crate log;

mod count_survey_responses;
mod load_survey_response;
mod submit_survey_response;

pub mod prelude {
    pub use super::{count_survey_responses::*, load_survey_response::*, submit_survey_response::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use survey_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use survey_db_sqlite::Connections;
}
