//! The server emits dates in whatever form its JSON encoder picks, which
//! for the reference backend is an RFC 2822 HTTP date.  Accept that along
//! with plain ISO dates and date-times; always emit `YYYY-MM-DD`.
use chrono::{
    DateTime,
    NaiveDate,
};
use serde::{
    de,
    Deserialize,
    Deserializer,
    Serializer,
};

pub const FORMAT: &str = "%Y-%m-%d";

pub fn parse(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, FORMAT).ok()
        .or_else(|| value.split_once('T')
            .and_then(|(date, _)| NaiveDate::parse_from_str(date, FORMAT).ok()))
        .or_else(|| DateTime::parse_from_rfc2822(value).ok()
            .map(|dt| dt.date_naive()))
}

pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unrecognized date: {s}"))),
    }
}
