use crate::{answer::*, identifier::*, time::*};

/// The answers to the questions of the survey.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyAnswers {
    pub was_attended    : WasAttended,
    pub attention_time  : AttentionTime,
    pub service_quality : ServiceQuality,
    /// 4. Suggestions or comments (optional)
    pub comments        : Option<String>,
}

/// A stored survey response.
///
/// At most one response exists per identifier. Every new
/// submission with the same identifier replaces the answers
/// and the time of submission.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    pub identifier   : Identifier,
    pub answers      : SurveyAnswers,
    pub submitted_at : Timestamp,
}
