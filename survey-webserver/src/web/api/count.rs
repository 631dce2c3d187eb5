use super::*;

#[get("/count/surveys")]
pub fn get_count_survey_responses(connections: sqlite::Connections) -> Result<usize> {
    Ok(Json(flows::count_survey_responses(&connections)?))
}
