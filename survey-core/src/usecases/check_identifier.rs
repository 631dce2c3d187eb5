use super::*;
use crate::util::validate::{
    normalize_identifier, validate_identifier, IdentifierInvalidation, VALID_IDENTIFIER_MESSAGE,
};

/// Result of checking an identifier while it is typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierCheck {
    /// The normalized input
    pub identifier: String,
    pub result: std::result::Result<Identifier, IdentifierInvalidation>,
}

impl IdentifierCheck {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    pub fn message(&self) -> String {
        match &self.result {
            Ok(_) => VALID_IDENTIFIER_MESSAGE.to_owned(),
            Err(reason) => reason.to_string(),
        }
    }
}

pub fn check_identifier(raw: &str) -> IdentifierCheck {
    IdentifierCheck {
        identifier: normalize_identifier(raw),
        result: validate_identifier(raw),
    }
}
