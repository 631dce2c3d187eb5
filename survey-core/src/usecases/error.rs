use crate::{entities::Question, repositories, util::validate::IdentifierInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please enter your identification number")]
    MissingIdentifier,
    #[error(transparent)]
    Identifier(#[from] IdentifierInvalidation),
    #[error("Please answer the question '{0}'")]
    MissingAnswer(Question),
    #[error("Invalid answer '{value}' for question '{question}'")]
    InvalidAnswer { question: Question, value: String },
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// Errors that are caused by the submitted values and not by the store.
    pub fn is_validation_error(&self) -> bool {
        !matches!(self, Self::Repo(_))
    }
}
