use survey_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use survey_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<survey_core::usecases::Error> for AppError {
    fn from(err: survey_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
}

impl AppError {
    /// The current submission failed because the store could not
    /// be reached in time. The user may try again later.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Business(BError::Repo(err)) if err.is_recoverable())
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        // Unwrap repository errors that have been
        // passed through the use case layer
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}
