//! Calendar date parsing shared by request models
//!
//! Dates travel as `YYYY-MM-DD`. Full RFC 3339 timestamps are accepted too
//! and truncated to their date part.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer};

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| format!("Data inválida: '{}'", raw))
}

/// Deserialize an optional date; empty strings count as absent
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.filter(|s| !s.trim().is_empty())
        .map(|s| parse_date(&s).map_err(serde::de::Error::custom))
        .transpose()
}

/// Current calendar date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
