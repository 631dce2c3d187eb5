use strum::{Display, EnumIter, EnumString, IntoStaticStr};

// NOTE:
// The kebab-case token of each variant is the persistent
// representation. Never rename a variant without migrating
// the stored values!

/// 1. Was the patient attended at all?
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum WasAttended {
    Yes,
    No,
}

/// 2. How long did it take until the patient was attended?
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AttentionTime {
    OneDay,
    OneWeek,
    OneMonth,
    More,
}

/// 3. How does the patient rate the service?
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ServiceQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl WasAttended {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl AttentionTime {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl ServiceQuality {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// The fixed questions of the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Question {
    WasAttended,
    AttentionTime,
    ServiceQuality,
}
