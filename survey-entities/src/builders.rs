pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::survey_answers_builder::*;

pub mod survey_answers_builder {

    use super::*;
    use crate::{answer::*, survey::*};

    #[derive(Debug)]
    pub struct SurveyAnswersBuild {
        answers: SurveyAnswers,
    }

    impl SurveyAnswersBuild {
        pub fn was_attended(mut self, v: WasAttended) -> Self {
            self.answers.was_attended = v;
            self
        }
        pub fn attention_time(mut self, v: AttentionTime) -> Self {
            self.answers.attention_time = v;
            self
        }
        pub fn service_quality(mut self, v: ServiceQuality) -> Self {
            self.answers.service_quality = v;
            self
        }
        pub fn comments(mut self, comments: Option<&str>) -> Self {
            self.answers.comments = comments.map(Into::into);
            self
        }
        pub fn finish(self) -> SurveyAnswers {
            self.answers
        }
    }

    impl Builder for SurveyAnswers {
        type Build = SurveyAnswersBuild;
        fn build() -> SurveyAnswersBuild {
            SurveyAnswersBuild {
                answers: SurveyAnswers {
                    was_attended: WasAttended::Yes,
                    attention_time: AttentionTime::OneDay,
                    service_quality: ServiceQuality::Excellent,
                    comments: None,
                },
            }
        }
    }
}
