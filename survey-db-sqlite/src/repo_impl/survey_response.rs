use super::*;

impl SurveyRepo for DbReadWrite<'_> {
    fn upsert_survey_response(
        &self,
        identifier: &Identifier,
        answers: &SurveyAnswers,
    ) -> Result<SurveyResponse> {
        upsert_survey_response(&mut self.conn.borrow_mut(), identifier, answers)
    }

    fn get_survey_response(&self, identifier: &Identifier) -> Result<SurveyResponse> {
        get_survey_response(&mut self.conn.borrow_mut(), identifier)
    }

    fn count_survey_responses(&self) -> Result<usize> {
        count_survey_responses(&mut self.conn.borrow_mut())
    }
}

impl SurveyRepo for DbConnection<'_> {
    fn upsert_survey_response(
        &self,
        identifier: &Identifier,
        answers: &SurveyAnswers,
    ) -> Result<SurveyResponse> {
        upsert_survey_response(&mut self.conn.borrow_mut(), identifier, answers)
    }

    fn get_survey_response(&self, identifier: &Identifier) -> Result<SurveyResponse> {
        get_survey_response(&mut self.conn.borrow_mut(), identifier)
    }

    fn count_survey_responses(&self) -> Result<usize> {
        count_survey_responses(&mut self.conn.borrow_mut())
    }
}

impl SurveyRepo for DbReadOnly<'_> {
    fn upsert_survey_response(
        &self,
        _identifier: &Identifier,
        _answers: &SurveyAnswers,
    ) -> Result<SurveyResponse> {
        unreachable!();
    }

    fn get_survey_response(&self, identifier: &Identifier) -> Result<SurveyResponse> {
        get_survey_response(&mut self.conn.borrow_mut(), identifier)
    }

    fn count_survey_responses(&self) -> Result<usize> {
        count_survey_responses(&mut self.conn.borrow_mut())
    }
}

fn upsert_survey_response(
    conn: &mut SqliteConnection,
    identifier: &Identifier,
    answers: &SurveyAnswers,
) -> Result<SurveyResponse> {
    use diesel::upsert::excluded;
    use schema::survey_responses::dsl;
    let SurveyAnswers {
        was_attended,
        attention_time,
        service_quality,
        comments,
    } = answers;
    let submitted_at = Timestamp::now();
    let model = models::NewSurveyResponse {
        identifier: identifier.as_str(),
        was_attended: was_attended.as_str(),
        attention_time: attention_time.as_str(),
        service_quality: service_quality.as_str(),
        comments: comments.as_deref(),
        submitted_at: submitted_at.as_millis(),
    };
    // Insert...
    let _count = diesel::insert_into(schema::survey_responses::table)
        .values(&model)
        .on_conflict(dsl::identifier)
        // ...or overwrite all answers including a missing comment
        .do_update()
        .set((
            dsl::was_attended.eq(excluded(dsl::was_attended)),
            dsl::attention_time.eq(excluded(dsl::attention_time)),
            dsl::service_quality.eq(excluded(dsl::service_quality)),
            dsl::comments.eq(excluded(dsl::comments)),
            dsl::submitted_at.eq(excluded(dsl::submitted_at)),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(SurveyResponse {
        identifier: identifier.clone(),
        answers: answers.clone(),
        submitted_at,
    })
}

fn get_survey_response(
    conn: &mut SqliteConnection,
    identifier: &Identifier,
) -> Result<SurveyResponse> {
    use schema::survey_responses::dsl;
    let model = dsl::survey_responses
        .filter(dsl::identifier.eq(identifier.as_str()))
        .first::<models::SurveyResponse>(conn)
        .map_err(from_diesel_err)?;
    load_survey_response(model)
}

fn count_survey_responses(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::survey_responses::dsl;
    Ok(dsl::survey_responses
        .select(diesel::dsl::count_star())
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn load_survey_response(model: models::SurveyResponse) -> Result<SurveyResponse> {
    let models::SurveyResponse {
        rowid: _,
        identifier,
        was_attended,
        attention_time,
        service_quality,
        comments,
        submitted_at,
    } = model;
    // The stored values have been validated on insert. If
    // parsing fails the database has been modified externally.
    let answers = SurveyAnswers {
        was_attended: was_attended
            .parse()
            .map_err(|_| anyhow!("Invalid answer stored for '{identifier}': {was_attended}"))?,
        attention_time: attention_time
            .parse()
            .map_err(|_| anyhow!("Invalid answer stored for '{identifier}': {attention_time}"))?,
        service_quality: service_quality
            .parse()
            .map_err(|_| anyhow!("Invalid answer stored for '{identifier}': {service_quality}"))?,
        comments,
    };
    let submitted_at = Timestamp::try_from_millis(submitted_at)
        .ok_or_else(|| anyhow!("Invalid submission time stored for '{identifier}': {submitted_at}"))?;
    Ok(SurveyResponse {
        identifier: Identifier::new_unchecked(identifier),
        answers,
        submitted_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::{usecases, RepoError};

    fn connections() -> Connections {
        Connections::init(&Config::in_memory()).unwrap()
    }

    fn new_response(identifier: &str) -> usecases::NewSurveyResponse {
        usecases::NewSurveyResponse {
            identifier: identifier.into(),
            was_attended: "yes".into(),
            attention_time: "one-day".into(),
            service_quality: "excellent".into(),
            comments: Some(String::new()),
        }
    }

    fn identifier(s: &str) -> Identifier {
        Identifier::new_unchecked(s.into())
    }

    #[test]
    fn upsert_and_read_back() {
        let connections = connections();
        let db = connections.exclusive().unwrap();
        let stored = usecases::submit_survey_response(&db, new_response("V-12345678")).unwrap();
        drop(db);

        let db = connections.shared().unwrap();
        let loaded = db.get_survey_response(&identifier("V-12345678")).unwrap();
        assert_eq!(stored.response, loaded);
        assert_eq!(WasAttended::Yes, loaded.answers.was_attended);
        assert_eq!(AttentionTime::OneDay, loaded.answers.attention_time);
        assert_eq!(ServiceQuality::Excellent, loaded.answers.service_quality);
        assert_eq!(None, loaded.answers.comments);
        assert!(loaded.submitted_at.as_millis() > 0);
    }

    #[test]
    fn upsert_empty_comment_and_read_back() {
        let connections = connections();
        let db = connections.exclusive().unwrap();
        let id = identifier("V-12345678");
        let answers = SurveyAnswers {
            was_attended: WasAttended::Yes,
            attention_time: AttentionTime::OneDay,
            service_quality: ServiceQuality::Excellent,
            comments: Some("".into()),
        };
        let stored = db.upsert_survey_response(&id, &answers).unwrap();
        drop(db);

        let loaded = connections
            .shared()
            .unwrap()
            .get_survey_response(&id)
            .unwrap();
        assert_eq!(stored, loaded);
        assert_eq!(answers, loaded.answers);
        assert_eq!(Some(""), loaded.answers.comments.as_deref());
        assert!(loaded.submitted_at.as_millis() > 0);
    }

    #[test]
    fn upsert_twice_keeps_a_single_row() {
        let connections = connections();
        let db = connections.exclusive().unwrap();
        let id = identifier("E-1234567");
        let first_answers = SurveyAnswers {
            was_attended: WasAttended::Yes,
            attention_time: AttentionTime::OneWeek,
            service_quality: ServiceQuality::Good,
            comments: Some("Friendly staff".into()),
        };
        let first = db.upsert_survey_response(&id, &first_answers).unwrap();
        let second_answers = SurveyAnswers {
            was_attended: WasAttended::No,
            attention_time: AttentionTime::More,
            service_quality: ServiceQuality::Poor,
            comments: None,
        };
        let second = db.upsert_survey_response(&id, &second_answers).unwrap();
        assert!(second.submitted_at >= first.submitted_at);

        assert_eq!(1, db.count_survey_responses().unwrap());
        let loaded = db.get_survey_response(&id).unwrap();
        assert_eq!(second_answers, loaded.answers);
        // The comment of the first submission must be gone
        assert_eq!(None, loaded.answers.comments);
        assert_eq!(second.submitted_at, loaded.submitted_at);
    }

    #[test]
    fn upsert_different_identifiers() {
        let connections = connections();
        let db = connections.exclusive().unwrap();
        for id in ["V-1234567", "V-12345678", "E-12345678"] {
            usecases::submit_survey_response(&db, new_response(id)).unwrap();
        }
        assert_eq!(3, db.count_survey_responses().unwrap());
    }

    #[test]
    fn get_missing_response() {
        let connections = connections();
        let db = connections.shared().unwrap();
        assert!(matches!(
            db.get_survey_response(&identifier("V-7654321")),
            Err(RepoError::NotFound)
        ));
        assert_eq!(
            None,
            db.try_get_survey_response(&identifier("V-7654321")).unwrap()
        );
    }

    #[test]
    fn rollback_failed_transaction() {
        let connections = connections();
        let db = connections.exclusive().unwrap();
        let res = db.transaction(|conn| {
            conn.upsert_survey_response(
                &identifier("V-12345678"),
                &SurveyAnswers {
                    was_attended: WasAttended::Yes,
                    attention_time: AttentionTime::OneDay,
                    service_quality: ServiceQuality::Fair,
                    comments: None,
                },
            )?;
            Err::<(), _>(RepoError::AlreadyExists)
        });
        assert!(matches!(res, Err(usecases::Error::Repo(RepoError::AlreadyExists))));
        assert_eq!(0, db.count_survey_responses().unwrap());
    }

    #[test]
    fn reject_unknown_answer_tokens_in_database() {
        let connections = connections();
        let db = connections.exclusive().unwrap();
        let mut pooled = db.sqlite_conn();
        let conn: &mut SqliteConnection = &mut pooled;
        let res = diesel::insert_into(schema::survey_responses::table)
            .values(&models::NewSurveyResponse {
                identifier: "V-12345678",
                was_attended: "maybe",
                attention_time: "one-day",
                service_quality: "good",
                comments: None,
                submitted_at: 0,
            })
            .execute(conn)
            .map_err(from_diesel_err);
        assert!(matches!(res, Err(RepoError::ConstraintViolation(_))));
    }

    #[test]
    fn in_memory_pool_is_clamped_to_a_single_connection() {
        let connections = Connections::init(&Config {
            pool_size: 4,
            ..Config::in_memory()
        })
        .unwrap();
        let db = connections.exclusive().unwrap();
        usecases::submit_survey_response(&db, new_response("E-12345678")).unwrap();
        drop(db);
        for _ in 0..4 {
            // Every checkout must see the same database
            let db = connections.shared().unwrap();
            assert_eq!(1, db.count_survey_responses().unwrap());
        }
    }

    #[test]
    fn ensure_schema_is_idempotent() {
        let connections = connections();
        connections.ensure_schema().unwrap();
        connections.ensure_schema().unwrap();
        let db = connections.exclusive().unwrap();
        usecases::submit_survey_response(&db, new_response("V-12345678")).unwrap();
        drop(db);
        connections.ensure_schema().unwrap();
        assert_eq!(
            1,
            connections.shared().unwrap().count_survey_responses().unwrap()
        );
    }
}
