use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A survey submission.
///
/// All fields are optional to report missing answers
/// with a meaningful message instead of a generic
/// deserialization error.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewSurveyResponse {
    #[serde(default)]
    pub identifier      : String,
    #[serde(default)]
    pub was_attended    : String,
    #[serde(default)]
    pub attention_time  : String,
    #[serde(default)]
    pub service_quality : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments        : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SurveyResponse {
    pub identifier      : String,
    pub was_attended    : WasAttended,
    pub attention_time  : AttentionTime,
    pub service_quality : ServiceQuality,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments        : Option<String>,
    /// Unix timestamp in milliseconds
    pub submitted_at    : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "kebab-case")]
pub enum WasAttended {
    Yes,
    No,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "kebab-case")]
pub enum AttentionTime {
    OneDay,
    OneWeek,
    OneMonth,
    More,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "kebab-case")]
pub enum ServiceQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct IdentifierCheckRequest {
    pub identifier: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct IdentifierCheck {
    /// The normalized identifier
    pub identifier: String,
    pub valid: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    /// The HTTP status code of the error response
    pub http_status: u16,
    pub message: String,
}
