// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use survey_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod survey_response;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::ForeignKeyViolation,
            info,
        ) => repo::Error::ConstraintViolation(info.message().to_owned()),
        DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand,
            _,
        ) => repo::Error::Unavailable(err.into()),
        // SQLITE_BUSY after the busy timeout has elapsed
        _ if is_database_locked(&err) => repo::Error::Unavailable(err.into()),
        _ => repo::Error::Other(err.into()),
    }
}

fn is_database_locked(err: &DieselError) -> bool {
    matches!(err, DieselError::DatabaseError(_, info) if info.message().contains("locked"))
}
