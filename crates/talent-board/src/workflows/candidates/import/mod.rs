mod normalizer;
mod parser;

use crate::workflows::candidates::domain::{
    Candidate, CandidateId, CandidateStatus, InvalidScore, Score, UnknownStatus,
};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use parser::RosterRecord;

#[derive(Debug)]
pub enum CandidateImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: u64, reason: RowProblem },
    DuplicateId { line: u64, id: CandidateId },
}

/// Why a single CSV row could not become a candidate.
#[derive(Debug)]
pub enum RowProblem {
    MissingName,
    MissingDate,
    InvalidDate(String),
    Status(UnknownStatus),
    MissingScore,
    InvalidScore(String),
    ScoreOutOfRange(InvalidScore),
}

impl std::fmt::Display for RowProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowProblem::MissingName => write!(f, "name is empty"),
            RowProblem::MissingDate => write!(f, "interview date is empty"),
            RowProblem::InvalidDate(raw) => write!(f, "'{raw}' is not a YYYY-MM-DD date"),
            RowProblem::Status(err) => write!(f, "{err}"),
            RowProblem::MissingScore => write!(f, "score is empty"),
            RowProblem::InvalidScore(raw) => write!(f, "'{raw}' is not a whole-number score"),
            RowProblem::ScoreOutOfRange(err) => write!(f, "{err}"),
        }
    }
}

impl std::fmt::Display for CandidateImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            CandidateImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            CandidateImportError::InvalidRow { line, reason } => {
                write!(f, "roster row on line {}: {}", line, reason)
            }
            CandidateImportError::DuplicateId { line, id } => {
                write!(f, "roster row on line {} repeats candidate id {}", line, id)
            }
        }
    }
}

impl std::error::Error for CandidateImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CandidateImportError::Io(err) => Some(err),
            CandidateImportError::Csv(err) => Some(err),
            CandidateImportError::InvalidRow { .. } | CandidateImportError::DuplicateId { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for CandidateImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CandidateImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a roster from a CSV export with `id,name,position,date,status,score` columns.
pub struct CandidateCsvImporter;

impl CandidateCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, CandidateImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, CandidateImportError> {
        let mut seen: HashSet<CandidateId> = HashSet::new();
        let mut roster = Vec::new();

        for record in parser::parse_records(reader)? {
            let line = record.line;
            let candidate = candidate_from_record(record)
                .map_err(|reason| CandidateImportError::InvalidRow { line, reason })?;
            if !seen.insert(candidate.id) {
                return Err(CandidateImportError::DuplicateId {
                    line,
                    id: candidate.id,
                });
            }
            roster.push(candidate);
        }

        debug!(candidates = roster.len(), "roster CSV imported");
        Ok(roster)
    }
}

fn candidate_from_record(record: RosterRecord) -> Result<Candidate, RowProblem> {
    if record.name.is_empty() {
        return Err(RowProblem::MissingName);
    }

    let raw_date = record.date.ok_or(RowProblem::MissingDate)?;
    let date = parser::parse_interview_date(&raw_date)
        .ok_or_else(|| RowProblem::InvalidDate(raw_date.trim().to_string()))?;

    let status: CandidateStatus = record.status.parse().map_err(RowProblem::Status)?;

    let raw_score = record.score.ok_or(RowProblem::MissingScore)?;
    let parsed = raw_score
        .trim()
        .parse::<i64>()
        .map_err(|_| RowProblem::InvalidScore(raw_score.trim().to_string()))?;
    let score = Score::try_from(parsed).map_err(RowProblem::ScoreOutOfRange)?;

    Ok(Candidate {
        id: CandidateId(record.id),
        name: record.name,
        position: record.position,
        date,
        status,
        score,
    })
}
