pub mod prelude {

    pub use survey_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
        pub use survey_db_sqlite::Config;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub fn new_survey_response(identifier: &str) -> usecases::NewSurveyResponse {
        usecases::NewSurveyResponse {
            identifier: identifier.into(),
            was_attended: "yes".into(),
            attention_time: "one-day".into(),
            service_quality: "excellent".into(),
            comments: None,
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(&sqlite::Config::in_memory()).unwrap();
            Self { db_connections }
        }

        pub fn submit(
            &self,
            new_response: usecases::NewSurveyResponse,
        ) -> Result<usecases::StoredSurveyResponse, AppError> {
            flows::submit_survey_response(&self.db_connections, new_response)
        }

        pub fn try_get(&self, identifier: &str) -> Option<SurveyResponse> {
            match flows::load_survey_response(&self.db_connections, identifier) {
                Ok(response) => Some(response),
                Err(AppError::Business(BError::Repo(RepoError::NotFound))) => None,
                Err(err) => panic!("{err}"),
            }
        }

        pub fn count(&self) -> usize {
            flows::count_survey_responses(&self.db_connections).unwrap()
        }
    }
}
