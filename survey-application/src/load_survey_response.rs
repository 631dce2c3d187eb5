use super::*;

pub fn load_survey_response(
    connections: &sqlite::Connections,
    identifier: &str,
) -> Result<SurveyResponse> {
    Ok(usecases::get_survey_response(
        &connections.shared()?,
        identifier,
    )?)
}
