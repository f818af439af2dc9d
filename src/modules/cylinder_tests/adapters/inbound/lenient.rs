// Forgiving serde field parsers for inbound JSON bodies and query strings.
//
// Rules
// - Absent, null and blank text all mean "no value".
// - Numbers may arrive as JSON numbers or as numeric text.
// - Dates may arrive as YYYY-MM-DD or as a full timestamp, which is cut down to its calendar date.
// - Anything else that is present but unparseable is an error, never a silent None.
//
// The `nullable_*` variants are for patches: pair them with `#[serde(default)]` so an absent field
// stays None (leave unchanged) while null or blank becomes Some(None) (clear).

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

fn parse_text<T>(raw: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e| format!("invalid value {raw:?}: {e}"))
}

pub fn parse_calendar_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(Some(date));
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(instant.date_naive()));
    }
    if let Ok(local) = raw.parse::<NaiveDateTime>() {
        return Ok(Some(local.date()));
    }
    Err(format!("invalid date {raw:?}, expected YYYY-MM-DD"))
}

/// Text that parses through `FromStr`. Used for query parameters, where every value is text.
pub fn text<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_text(&raw).map_err(de::Error::custom),
        None => Ok(None),
    }
}

pub fn number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        Some(NumberOrText::Number(value)) => Ok(Some(value)),
        Some(NumberOrText::Text(raw)) => parse_text(&raw).map_err(de::Error::custom),
        None => Ok(None),
    }
}

pub fn calendar_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_calendar_date(&raw).map_err(de::Error::custom),
        None => Ok(None),
    }
}

pub fn nullable_number<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    number(deserializer).map(Some)
}

pub fn nullable_calendar_date<'de, D>(
    deserializer: D,
) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    calendar_date(deserializer).map(Some)
}
