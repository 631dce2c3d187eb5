use std::fmt;

/// Identification number ("cédula") of a patient, e.g. `V-12345678`.
///
/// The value is expected to be normalized and validated before
/// it is wrapped. Use the validator of the core crate to obtain
/// an instance from user input.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub const fn new_unchecked(identifier: String) -> Self {
        Self(identifier)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Identifier> for String {
    fn from(from: Identifier) -> Self {
        from.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
