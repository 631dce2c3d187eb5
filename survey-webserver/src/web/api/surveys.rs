use super::*;

#[post("/surveys", data = "<body>")]
pub fn post_survey_response(
    connections: sqlite::Connections,
    body: JsonResult<json::NewSurveyResponse>,
) -> Result<json::SurveyResponse> {
    let new_response = json::new_survey_response(body?.into_inner());
    let usecases::StoredSurveyResponse { response, .. } =
        flows::submit_survey_response(&connections, new_response)?;
    Ok(Json(response.into()))
}

#[get("/surveys/<identifier>")]
pub fn get_survey_response(
    connections: sqlite::Connections,
    identifier: &str,
) -> Result<json::SurveyResponse> {
    let response = flows::load_survey_response(&connections, identifier)?;
    Ok(Json(response.into()))
}
