use std::fmt;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A point in time with millisecond precision (UTC).
///
/// All timestamps are persisted as unix timestamps in
/// **milli**seconds. Sub-millisecond fractions are truncated
/// on construction so that a value survives a round trip
/// through the database unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        Self::try_from_millis(unix_millis(now)).unwrap_or(Self(now))
    }

    pub fn try_from_millis(millis: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .ok()
            .map(Self)
    }

    pub fn as_millis(self) -> i64 {
        unix_millis(self.0)
    }
}

fn unix_millis(dt: OffsetDateTime) -> i64 {
    // Always within range for dates between the years -9999 and 9999
    (dt.unix_timestamp_nanos() / 1_000_000) as i64
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{}", self.as_millis()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_millis() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::try_from_millis(t1.as_millis()).unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn truncate_to_millis() {
        let t = Timestamp::now();
        let nanos = OffsetDateTime::from(t).unix_timestamp_nanos();
        assert_eq!(0, nanos % 1_000_000);
    }

    #[test]
    fn display_as_rfc3339() {
        let t = Timestamp::try_from_millis(1_700_000_000_123).unwrap();
        assert_eq!("2023-11-14T22:13:20.123Z", t.to_string());
    }
}
