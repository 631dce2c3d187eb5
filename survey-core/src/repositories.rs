// Low-level database access traits.
// The survey is stored in a single table, so there is
// only a single repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("The database is currently unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Errors that might disappear when retrying the same operation later.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

type Result<T> = std::result::Result<T, Error>;

pub trait SurveyRepo {
    /// Insert the answers for a new identifier or replace the
    /// answers of an existing one.
    ///
    /// The time of submission is set by the repository. The
    /// returned response reflects the stored record.
    fn upsert_survey_response(
        &self,
        identifier: &Identifier,
        answers: &SurveyAnswers,
    ) -> Result<SurveyResponse>;

    fn get_survey_response(&self, identifier: &Identifier) -> Result<SurveyResponse>;

    fn try_get_survey_response(&self, identifier: &Identifier) -> Result<Option<SurveyResponse>> {
        match self.get_survey_response(identifier) {
            Ok(response) => Ok(Some(response)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn count_survey_responses(&self) -> Result<usize>;
}
