mod check_identifier;
mod error;
mod submit_survey_response;


pub use self::{check_identifier::*, error::Error, submit_survey_response::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_survey_response<R>(repo: &R, identifier: &str) -> Result<SurveyResponse>
where
    R: SurveyRepo,
{
    let identifier = crate::util::validate::validate_identifier(identifier)?;
    Ok(repo.get_survey_response(&identifier)?)
}

pub fn count_survey_responses<R: SurveyRepo>(repo: &R) -> Result<usize> {
    Ok(repo.count_survey_responses()?)
}
