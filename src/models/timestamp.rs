//! Record timestamps as found in the data files.
//!
//! Files written by older tooling carry naive ISO-8601 times without an
//! offset (`"2024-03-09T12:00:00.123456"`); those are read as UTC. Values that
//! parse neither way are dropped rather than failing the whole file.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| value.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc()))
}

pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("2024-03-09T12:00:00Z")]
    #[case("2024-03-09T13:00:00+01:00")]
    #[case("2024-03-09T12:00:00")]
    #[case("2024-03-09T12:00:00.000000")]
    fn test_parse_accepts_offset_and_naive(#[case] raw: &str) {
        let expected = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(parse(raw), Some(expected));
    }

    #[test]
    fn test_parse_keeps_fraction() {
        let parsed = parse("2024-03-09T12:00:00.123456").unwrap();
        assert_eq!(parsed.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse("last tuesday"), None);
    }
}
