use super::*;
use survey_entities as e;

impl From<e::answer::WasAttended> for WasAttended {
    fn from(from: e::answer::WasAttended) -> Self {
        use e::answer::WasAttended as E;
        match from {
            E::Yes => Self::Yes,
            E::No => Self::No,
        }
    }
}

impl From<e::answer::AttentionTime> for AttentionTime {
    fn from(from: e::answer::AttentionTime) -> Self {
        use e::answer::AttentionTime as E;
        match from {
            E::OneDay => Self::OneDay,
            E::OneWeek => Self::OneWeek,
            E::OneMonth => Self::OneMonth,
            E::More => Self::More,
        }
    }
}

impl From<e::answer::ServiceQuality> for ServiceQuality {
    fn from(from: e::answer::ServiceQuality) -> Self {
        use e::answer::ServiceQuality as E;
        match from {
            E::Excellent => Self::Excellent,
            E::Good => Self::Good,
            E::Fair => Self::Fair,
            E::Poor => Self::Poor,
        }
    }
}

impl From<e::survey::SurveyResponse> for SurveyResponse {
    fn from(from: e::survey::SurveyResponse) -> Self {
        let e::survey::SurveyResponse {
            identifier,
            answers,
            submitted_at,
        } = from;
        let e::survey::SurveyAnswers {
            was_attended,
            attention_time,
            service_quality,
            comments,
        } = answers;
        Self {
            identifier: identifier.into_string(),
            was_attended: was_attended.into(),
            attention_time: attention_time.into(),
            service_quality: service_quality.into(),
            comments,
            submitted_at: submitted_at.as_millis(),
        }
    }
}
