use chrono::{DateTime, Utc};
use mongodb::bson::{self, Bson};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

// Dates come back from MongoDB as BSON dates and from JSON bodies (or older
// documents) as RFC 3339 strings.

fn bson_to_chrono<E: Error>(value: Bson) -> Result<Option<DateTime<Utc>>, E> {
    match value {
        Bson::Null => Ok(None),
        Bson::DateTime(dt) => DateTime::from_timestamp_millis(dt.timestamp_millis())
            .map(Some)
            .ok_or_else(|| E::custom("date out of range")),
        Bson::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| E::custom(format!("invalid date `{}`: {}", s, e))),
        other => Err(E::custom(format!(
            "expected a date or RFC 3339 string, found {:?}",
            other.element_type()
        ))),
    }
}

pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    bson_to_chrono::<D::Error>(Bson::deserialize(deserializer)?)?
        .ok_or_else(|| D::Error::custom("date is required"))
}

pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Bson>::deserialize(deserializer)? {
        Some(value) => bson_to_chrono(value),
        None => Ok(None),
    }
}

pub fn to_bson_datetime(dt: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(dt.timestamp_millis())
}
