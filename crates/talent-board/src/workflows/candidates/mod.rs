//! Candidate roster: filtering, sorting and side-by-side comparison.
//!
//! Everything below `service` is pure. A `RosterQuery` carries the table state
//! (search term, status, advanced filters, sort) and is applied to a roster snapshot as
//! filter-then-sort; comparison runs separately over `ComparisonSlots`.

pub mod comparison;
pub mod domain;
pub mod filter;
pub mod fixtures;
pub mod import;
pub mod query;
pub mod repository;
pub mod router;
pub mod service;
pub mod sort;

#[cfg(test)]
mod tests;

pub use comparison::{recommend, ComparisonReport, ComparisonSlots, Recommendation};
pub use domain::{
    Candidate, CandidateId, CandidateStatus, ComparisonCandidate, DateRange, FilterOptions,
    Score, ScoreBand, ScoreBoundKind, StatusFilter,
};
pub use filter::{filter_candidates, matches, parse_date_bound, parse_score_bound};
pub use import::{CandidateCsvImporter, CandidateImportError};
pub use query::{unique_positions, QueryError, RosterQuery, RosterQueryParams, RosterView};
pub use repository::{CandidateRepository, RepositoryError};
pub use router::{candidate_router, CompareRequest};
pub use service::{RosterService, RosterServiceError};
pub use sort::{compare, sort_by_field, sort_candidates, SortDirection, SortField, SortKey, SortState};
