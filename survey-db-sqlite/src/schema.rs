///////////////////////////////////////////////////////////////////////
// Survey responses
///////////////////////////////////////////////////////////////////////

table! {
    survey_responses (rowid) {
        rowid -> BigInt,
        identifier -> Text,
        was_attended -> Text,
        attention_time -> Text,
        service_quality -> Text,
        comments -> Nullable<Text>,
        submitted_at -> BigInt,
    }
}
