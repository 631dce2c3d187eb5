use crate::entities::{Identifier, SurveyAnswers};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref IDENTIFIER_REGEX: Regex = Regex::new(r"^[VE]-\d{7,8}$").unwrap();
    static ref DECIMAL_DIGIT_REGEX: Regex = Regex::new(r"^\d$").unwrap();
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierInvalidation {
    #[error("Invalid format. Use V-12345678 or E-12345678")]
    Shape,
    #[error("The characters after the hyphen must be digits")]
    NonDigitSuffix,
}

pub const VALID_IDENTIFIER_MESSAGE: &str = "Valid identifier";

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0; 4];
    DECIMAL_DIGIT_REGEX.is_match(c.encode_utf8(&mut buf))
}

// Unicode decimal digits are assigned in contiguous runs
// that start with zero, so the value of a digit is its
// distance to the start of its run modulo 10.
fn to_ascii_digit(c: char) -> char {
    if c.is_ascii() || !is_decimal_digit(c) {
        return c;
    }
    let mut zero = c;
    while let Some(prev) = (zero as u32)
        .checked_sub(1)
        .and_then(char::from_u32)
        .filter(|prev| is_decimal_digit(*prev))
    {
        zero = prev;
    }
    char::from_digit((c as u32 - zero as u32) % 10, 10).unwrap_or(c)
}

/// Trim, uppercase, and replace all decimal digits by
/// their ASCII counterparts.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .map(to_ascii_digit)
        .collect()
}

/// Check an identifier as typed by a user.
///
/// The input is normalized before it is matched against
/// `^[VE]-\d{7,8}$`, where `\d` is any decimal digit. The
/// returned identifier is the normalized form that only
/// contains ASCII digits.
pub fn validate_identifier(raw: &str) -> Result<Identifier, IdentifierInvalidation> {
    let normalized = normalize_identifier(raw);
    if !IDENTIFIER_REGEX.is_match(&normalized) {
        return Err(IdentifierInvalidation::Shape);
    }
    // The prefix letter and the hyphen are both single-byte characters
    let digits = &normalized[2..];
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(IdentifierInvalidation::NonDigitSuffix);
    }
    Ok(Identifier::new_unchecked(normalized))
}

impl AutoCorrect for SurveyAnswers {
    fn auto_correct(mut self) -> Self {
        self.comments = self
            .comments
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());
        self
    }
}
