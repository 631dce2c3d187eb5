use super::*;

pub fn count_survey_responses(connections: &sqlite::Connections) -> Result<usize> {
    Ok(usecases::count_survey_responses(&connections.shared()?)?)
}
