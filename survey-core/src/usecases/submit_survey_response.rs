use super::*;
use crate::util::validate::{validate_identifier, AutoCorrect};
use std::str::FromStr;

/// A survey submission as it is received from the form.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewSurveyResponse {
    pub identifier      : String,
    pub was_attended    : String,
    pub attention_time  : String,
    pub service_quality : String,
    pub comments        : Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSurveyResponse {
    pub response: SurveyResponse,
    /// An earlier response for the same identifier has been overwritten
    pub replaced: bool,
}

fn parse_answer<T: FromStr>(question: Question, value: &str) -> Result<T> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingAnswer(question));
    }
    value.parse().map_err(|_| Error::InvalidAnswer {
        question,
        value: value.to_owned(),
    })
}

/// Validate all submitted values without touching the store.
pub fn prepare_survey_response(new: NewSurveyResponse) -> Result<(Identifier, SurveyAnswers)> {
    let NewSurveyResponse {
        identifier,
        was_attended,
        attention_time,
        service_quality,
        comments,
    } = new;
    if identifier.trim().is_empty() {
        return Err(Error::MissingIdentifier);
    }
    let identifier = validate_identifier(&identifier)?;
    let answers = SurveyAnswers {
        was_attended: parse_answer(Question::WasAttended, &was_attended)?,
        attention_time: parse_answer(Question::AttentionTime, &attention_time)?,
        service_quality: parse_answer(Question::ServiceQuality, &service_quality)?,
        comments,
    }
    .auto_correct();
    Ok((identifier, answers))
}

pub fn submit_survey_response<R>(repo: &R, new: NewSurveyResponse) -> Result<StoredSurveyResponse>
where
    R: SurveyRepo,
{
    let (identifier, answers) = prepare_survey_response(new)?;
    let replaced = repo.try_get_survey_response(&identifier)?.is_some();
    if replaced {
        log::debug!("Replacing the previous survey response of {identifier}");
    }
    let response = repo.upsert_survey_response(&identifier, &answers)?;
    debug_assert_eq!(identifier, response.identifier);
    debug_assert_eq!(answers, response.answers);
    Ok(StoredSurveyResponse { response, replaced })
}
