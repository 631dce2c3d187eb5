// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = survey_responses)]
pub struct NewSurveyResponse<'a> {
    pub identifier: &'a str,
    pub was_attended: &'a str,
    pub attention_time: &'a str,
    pub service_quality: &'a str,
    pub comments: Option<&'a str>,
    pub submitted_at: i64,
}

#[derive(Queryable)]
pub struct SurveyResponse {
    pub rowid: i64,
    pub identifier: String,
    pub was_attended: String,
    pub attention_time: String,
    pub service_quality: String,
    pub comments: Option<String>,
    pub submitted_at: i64,
}
