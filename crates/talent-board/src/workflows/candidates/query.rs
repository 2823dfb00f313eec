use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::domain::{
    Candidate, DateRange, FilterOptions, ScoreBoundKind, StatusFilter, UnknownStatus,
};
use super::filter::{filter_candidates, parse_date_bound, parse_score_bound, InvalidDateBound};
use super::sort::{sort_candidates, SortDirection, SortField, SortState, UnknownSortKey};

/// Snapshot of everything that shapes the roster table: search, status, advanced filters
/// and sort order. Applied to a roster as filter-then-sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub filters: FilterOptions,
    #[serde(default)]
    pub sort: SortState,
}

impl RosterQuery {
    pub fn apply<'a>(&self, roster: &'a [Candidate]) -> Vec<&'a Candidate> {
        let mut visible = filter_candidates(roster, &self.search, self.status, &self.filters);
        sort_candidates(&mut visible, self.sort);
        visible
    }

    pub fn view(&self, roster: &[Candidate]) -> RosterView {
        let candidates: Vec<Candidate> = self.apply(roster).into_iter().cloned().collect();
        RosterView {
            total: candidates.len(),
            roster_size: roster.len(),
            sort: self.sort,
            candidates,
        }
    }
}

/// Filtered, sorted roster ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterView {
    pub total: usize,
    pub roster_size: usize,
    pub sort: SortState,
    pub candidates: Vec<Candidate>,
}

impl RosterView {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Distinct positions in first-seen order, for the position filter dropdown.
pub fn unique_positions(roster: &[Candidate]) -> Vec<String> {
    let mut seen = HashSet::new();
    roster
        .iter()
        .filter(|candidate| seen.insert(candidate.position.as_str()))
        .map(|candidate| candidate.position.clone())
        .collect()
}

/// Loosely typed query input as it arrives from a query string or command line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterQueryParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub position: Option<String>,
    pub min_score: Option<String>,
    pub max_score: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl RosterQueryParams {
    /// Score bounds never fail (they fall back to 0/100); unknown statuses, sort keys and
    /// malformed dates are rejected.
    pub fn into_query(self) -> Result<RosterQuery, QueryError> {
        let status = match self.status.as_deref() {
            Some(raw) => raw.parse()?,
            None => StatusFilter::All,
        };
        let min_score = self
            .min_score
            .as_deref()
            .map_or(ScoreBoundKind::Min.fallback(), |raw| {
                parse_score_bound(raw, ScoreBoundKind::Min)
            });
        let max_score = self
            .max_score
            .as_deref()
            .map_or(ScoreBoundKind::Max.fallback(), |raw| {
                parse_score_bound(raw, ScoreBoundKind::Max)
            });
        let date_range = DateRange {
            start: self.start.as_deref().map(parse_date_bound).transpose()?.flatten(),
            end: self.end.as_deref().map(parse_date_bound).transpose()?.flatten(),
        };
        let field = match self.sort.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortField::default(),
        };
        let direction = match self.direction.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortDirection::default(),
        };

        Ok(RosterQuery {
            search: self.search.unwrap_or_default(),
            status,
            filters: FilterOptions {
                position: self.position.map(|p| p.trim().to_string()).unwrap_or_default(),
                min_score,
                max_score,
                date_range,
            },
            sort: SortState::new(field, direction),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Status(#[from] UnknownStatus),
    #[error(transparent)]
    Sort(#[from] UnknownSortKey),
    #[error(transparent)]
    Date(#[from] InvalidDateBound),
}
