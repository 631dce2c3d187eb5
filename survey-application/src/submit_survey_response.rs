use super::*;

pub fn submit_survey_response(
    connections: &sqlite::Connections,
    new_response: usecases::NewSurveyResponse,
) -> Result<usecases::StoredSurveyResponse> {
    let raw_identifier = new_response.identifier.clone();
    let stored = connections.exclusive()?.transaction(|conn| {
        usecases::submit_survey_response(conn, new_response).map_err(|err| {
            if err.is_validation_error() {
                warn!("Rejected survey response of {raw_identifier:?}: {err}");
            } else {
                error!("Failed to store survey response of {raw_identifier:?}: {err}");
            }
            err
        })
    })?;
    let usecases::StoredSurveyResponse { response, replaced } = &stored;
    if *replaced {
        info!(
            "Replaced survey response of {} ({})",
            response.identifier, response.submitted_at
        );
    } else {
        info!(
            "Created survey response of {} ({})",
            response.identifier, response.submitted_at
        );
    }
    Ok(stored)
}
