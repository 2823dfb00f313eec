use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::workflows::candidates::sort::{
    sort_by_field, SortDirection, SortKey, SortState, UnknownSortKey,
};

/// Status code the feed uses for a rejected candidate.
pub const STATUS_REJECTED: i64 = 5;
/// Status code the feed uses for a selected candidate.
pub const STATUS_SELECTED: i64 = 10;

const MISSING: &str = "N/A";

/// One candidate on one posted job, flattened out of the interview feed.
///
/// `job_id` and `status` are `None` when the feed sent them as null or non-numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRow {
    pub candidate_id: String,
    pub job_id: Option<i64>,
    pub status: Option<i64>,
    pub title: String,
    pub posted_on: String,
}

impl InterviewRow {
    /// "Rejected" and "Selected" for the two terminal codes, the bare code otherwise.
    pub fn status_label(&self) -> String {
        match self.status {
            Some(STATUS_REJECTED) => "Rejected".to_string(),
            Some(STATUS_SELECTED) => "Selected".to_string(),
            Some(other) => other.to_string(),
            None => MISSING.to_string(),
        }
    }

    pub fn status_tone(&self) -> StatusTone {
        match self.status {
            Some(STATUS_SELECTED) => StatusTone::Positive,
            Some(STATUS_REJECTED | 3) => StatusTone::Negative,
            Some(4) => StatusTone::Caution,
            Some(2) => StatusTone::Info,
            _ => StatusTone::Neutral,
        }
    }

    pub fn job_label(&self) -> String {
        self.job_id
            .map_or_else(|| MISSING.to_string(), |id| id.to_string())
    }

    pub fn matches_search(&self, search_term: &str) -> bool {
        if search_term.is_empty() {
            return true;
        }
        let needle = search_term.to_lowercase();
        [
            self.candidate_id.to_lowercase(),
            self.job_label().to_lowercase(),
            self.status_label().to_lowercase(),
            self.title.to_lowercase(),
            self.posted_on.to_lowercase(),
        ]
        .iter()
        .any(|field| field.contains(&needle))
    }
}

/// Badge tone for a feed status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Positive,
    Negative,
    Caution,
    Info,
    Neutral,
}

/// Sortable interview-row columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowField {
    CandidateId,
    JobId,
    Status,
    Title,
    #[default]
    PostedOn,
}

impl RowField {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::CandidateId,
            Self::JobId,
            Self::Status,
            Self::Title,
            Self::PostedOn,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CandidateId => "candidate_id",
            Self::JobId => "job_id",
            Self::Status => "status",
            Self::Title => "title",
            Self::PostedOn => "posted_on",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RowField {
    type Err = UnknownSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().replace('-', "_");
        Self::ordered()
            .into_iter()
            .find(|field| {
                field.label().eq_ignore_ascii_case(&normalized)
                    || field.label().replace('_', "").eq_ignore_ascii_case(&normalized)
            })
            .ok_or_else(|| UnknownSortKey(value.trim().to_string()))
    }
}

impl SortKey for InterviewRow {
    type Field = RowField;

    fn cmp_field(&self, other: &Self, field: RowField) -> Ordering {
        match field {
            RowField::CandidateId => self.candidate_id.cmp(&other.candidate_id),
            RowField::JobId => self.job_id.cmp(&other.job_id),
            RowField::Status => self.status.cmp(&other.status),
            RowField::Title => self.title.cmp(&other.title),
            RowField::PostedOn => self.posted_on.cmp(&other.posted_on),
        }
    }
}

/// Newest postings first.
pub fn default_row_sort() -> SortState<RowField> {
    SortState::new(RowField::PostedOn, SortDirection::Desc)
}

/// Search-then-sort over feed rows.
pub fn arrange_rows(
    rows: &[InterviewRow],
    search_term: &str,
    sort: SortState<RowField>,
) -> Vec<InterviewRow> {
    let mut visible: Vec<InterviewRow> = rows
        .iter()
        .filter(|row| row.matches_search(search_term))
        .cloned()
        .collect();
    sort_by_field(&mut visible, sort.field, sort.direction);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(candidate_id: &str, job_id: i64, status: i64, posted_on: &str) -> InterviewRow {
        InterviewRow {
            candidate_id: candidate_id.to_string(),
            job_id: Some(job_id),
            status: Some(status),
            title: "Platform Engineer".to_string(),
            posted_on: posted_on.to_string(),
        }
    }

    #[test]
    fn status_label_names_terminal_codes_only() {
        assert_eq!(row("c1", 1, 10, "2024-01-01").status_label(), "Selected");
        assert_eq!(row("c1", 1, 5, "2024-01-01").status_label(), "Rejected");
        assert_eq!(row("c1", 1, 2, "2024-01-01").status_label(), "2");
    }

    #[test]
    fn status_tone_follows_code() {
        assert_eq!(row("c", 1, 10, "").status_tone(), StatusTone::Positive);
        assert_eq!(row("c", 1, 3, "").status_tone(), StatusTone::Negative);
        assert_eq!(row("c", 1, 4, "").status_tone(), StatusTone::Caution);
        assert_eq!(row("c", 1, 2, "").status_tone(), StatusTone::Info);
        assert_eq!(row("c", 1, 42, "").status_tone(), StatusTone::Neutral);
    }

    #[test]
    fn arrange_rows_defaults_to_newest_posting_first() {
        let rows = vec![
            row("a", 1, 1, "2024-01-05"),
            row("b", 2, 1, "2024-03-01"),
            row("c", 3, 1, "2024-02-10"),
        ];
        let arranged = arrange_rows(&rows, "", default_row_sort());
        let ids: Vec<_> = arranged.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn arrange_rows_searches_status_label() {
        let rows = vec![row("a", 1, 10, "2024-01-05"), row("b", 2, 5, "2024-03-01")];
        let arranged = arrange_rows(&rows, "REJECT", default_row_sort());
        assert_eq!(arranged.len(), 1);
        assert_eq!(arranged[0].candidate_id, "b");
    }

    #[test]
    fn missing_codes_read_as_not_available_and_sort_first() {
        let mut unknown = row("u", 0, 0, "2024-02-01");
        unknown.job_id = None;
        unknown.status = None;
        assert_eq!(unknown.job_label(), "N/A");
        assert_eq!(unknown.status_label(), "N/A");
        assert_eq!(unknown.status_tone(), StatusTone::Neutral);
        assert!(unknown.matches_search("n/a"));

        let rows = vec![row("a", 3, 10, "2024-01-05"), unknown];
        let arranged = arrange_rows(&rows, "", SortState::new(RowField::JobId, SortDirection::Asc));
        assert_eq!(arranged[0].candidate_id, "u");
    }

    #[test]
    fn default_row_field_is_posted_on() {
        assert_eq!(RowField::default(), RowField::PostedOn);
        assert_eq!(SortState::<RowField>::default().field, RowField::PostedOn);
    }

    #[test]
    fn row_field_accepts_camel_and_snake_case() {
        assert_eq!("postedOn".parse::<RowField>(), Ok(RowField::PostedOn));
        assert_eq!("job_id".parse::<RowField>(), Ok(RowField::JobId));
        assert_eq!("candidate-id".parse::<RowField>(), Ok(RowField::CandidateId));
        assert!("salary".parse::<RowField>().is_err());
    }
}
