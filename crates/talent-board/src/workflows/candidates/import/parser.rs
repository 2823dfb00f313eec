use super::normalizer::normalize_text;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One CSV row after header mapping, before domain validation.
#[derive(Debug)]
pub(crate) struct RosterRecord {
    pub(crate) line: u64,
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) position: String,
    pub(crate) date: Option<String>,
    pub(crate) status: String,
    pub(crate) score: Option<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RosterRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row = record?;
        records.push(RosterRecord {
            // Header is line 1.
            line: index as u64 + 2,
            id: row.id,
            name: normalize_text(&row.name),
            position: normalize_text(&row.position),
            date: row.date,
            status: normalize_text(&row.status),
            score: row.score,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(alias = "ID", alias = "Id")]
    id: u32,
    #[serde(alias = "Name")]
    name: String,
    #[serde(alias = "Position")]
    position: String,
    #[serde(
        alias = "Date",
        alias = "Interview Date",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    date: Option<String>,
    #[serde(alias = "Status")]
    status: String,
    #[serde(alias = "Score", default, deserialize_with = "empty_string_as_none")]
    score: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts plain `YYYY-MM-DD` dates as well as RFC 3339 timestamps.
pub(crate) fn parse_interview_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}
