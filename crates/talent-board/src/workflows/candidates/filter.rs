use chrono::NaiveDate;

use super::domain::{Candidate, FilterOptions, ScoreBoundKind, StatusFilter};

/// Decides whether a candidate survives every active criterion.
///
/// Criteria are conjunctive. Status, position, score and date are checked before the
/// free-text search since they are cheaper than stringifying the record.
pub fn matches(
    candidate: &Candidate,
    search_term: &str,
    status: StatusFilter,
    options: &FilterOptions,
) -> bool {
    status.admits(candidate.status)
        && matches_position(candidate, &options.position)
        && matches_score(candidate, options.min_score, options.max_score)
        && options.date_range.contains(candidate.date)
        && matches_search(candidate, search_term)
}

/// Keeps the candidates that match, preserving their input order.
pub fn filter_candidates<'a, I>(
    candidates: I,
    search_term: &str,
    status: StatusFilter,
    options: &FilterOptions,
) -> Vec<&'a Candidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates
        .into_iter()
        .filter(|candidate| matches(candidate, search_term, status, options))
        .collect()
}

pub(crate) fn matches_search(candidate: &Candidate, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    candidate
        .search_haystack()
        .iter()
        .any(|field| field.contains(&needle))
}

fn matches_position(candidate: &Candidate, position: &str) -> bool {
    position.is_empty() || candidate.position == position
}

fn matches_score(candidate: &Candidate, min_score: i32, max_score: i32) -> bool {
    let score = i32::from(candidate.score.value());
    score >= min_score && score <= max_score
}

/// Reads a score bound from free-form input.
///
/// A leading integer is taken as the bound (`"12abc"` is 12); anything without one falls
/// back to 0 for the minimum and 100 for the maximum.
pub fn parse_score_bound(raw: &str, kind: ScoreBoundKind) -> i32 {
    leading_integer(raw).unwrap_or_else(|| kind.fallback())
}

fn leading_integer(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end]
        .parse::<i64>()
        .unwrap_or(i64::MAX)
        .min(i64::from(i32::MAX));
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Reads an optional date bound; blank input leaves the bound unset.
pub fn parse_date_bound(raw: &str) -> Result<Option<NaiveDate>, InvalidDateBound> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| InvalidDateBound(trimmed.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse '{0}' as YYYY-MM-DD")]
pub struct InvalidDateBound(pub String);
