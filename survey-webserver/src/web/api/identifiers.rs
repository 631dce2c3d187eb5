use super::*;

/// Validate an identifier while it is being typed.
///
/// Never fails for well-formed requests, the outcome
/// is reported in the response body.
#[post("/identifiers/check", data = "<body>")]
pub fn post_identifier_check(
    body: JsonResult<json::IdentifierCheckRequest>,
) -> Result<json::IdentifierCheck> {
    let json::IdentifierCheckRequest { identifier } = body?.into_inner();
    let check = usecases::check_identifier(&identifier);
    Ok(Json(json::identifier_check(check)))
}
