//! Backend timestamps.
//!
//! The API emits RFC 3339 strings, except for records written with a naive
//! UTC clock which carry no offset at all. Both read back as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()))
}

pub(crate) mod utc {
    use super::*;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

pub(crate) mod utc_option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(stamp) => super::utc::serialize(stamp, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_timestamp(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_offset_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2025-03-14T09:30:00Z").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-03-14T12:30:00+03:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-03-14T09:30:00").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2025-03-14T09:30:00.250000").unwrap(),
            expected + chrono::Duration::milliseconds(250)
        );
        assert!(parse_timestamp("yesterday").is_err());
    }
}
