pub use survey_boundary::*;

use survey_core::usecases;

pub fn new_survey_response(from: NewSurveyResponse) -> usecases::NewSurveyResponse {
    let NewSurveyResponse {
        identifier,
        was_attended,
        attention_time,
        service_quality,
        comments,
    } = from;
    usecases::NewSurveyResponse {
        identifier,
        was_attended,
        attention_time,
        service_quality,
        comments,
    }
}

pub fn identifier_check(from: usecases::IdentifierCheck) -> IdentifierCheck {
    IdentifierCheck {
        valid: from.is_valid(),
        message: from.message(),
        identifier: from.identifier,
    }
}
