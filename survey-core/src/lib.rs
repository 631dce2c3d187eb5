pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use survey_entities::{answer::*, identifier::*, survey::*, time::*};
}

pub use repositories::Error as RepoError;
