use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use super::comparison::{ComparisonReport, ComparisonSlots};
use super::domain::{Candidate, CandidateId};
use super::query::{unique_positions, RosterQuery, RosterView};
use super::repository::{CandidateRepository, RepositoryError};

/// Service composing the roster repository with the filter, sort and comparison logic.
pub struct RosterService<R> {
    repository: Arc<R>,
}

impl<R> RosterService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Filtered and sorted roster for the given query.
    pub fn list(&self, query: &RosterQuery) -> Result<RosterView, RosterServiceError> {
        let roster = self.repository.roster()?;
        let view = query.view(&roster);
        debug!(
            search = %query.search,
            sort = %query.sort.field,
            visible = view.total,
            roster = view.roster_size,
            "roster query evaluated"
        );
        Ok(view)
    }

    pub fn positions(&self) -> Result<Vec<String>, RosterServiceError> {
        let roster = self.repository.roster()?;
        Ok(unique_positions(&roster))
    }

    pub fn get(&self, id: CandidateId) -> Result<Candidate, RosterServiceError> {
        self.repository
            .fetch(id)?
            .ok_or(RosterServiceError::UnknownCandidate(id))
    }

    /// Compares the candidates named by `candidate_ids`; `None` marks an empty slot.
    pub fn compare(
        &self,
        candidate_ids: &[Option<CandidateId>],
    ) -> Result<ComparisonReport, RosterServiceError> {
        let roster = self.repository.roster()?;
        let slots = ComparisonSlots::from_ids(candidate_ids, &roster);
        Ok(ComparisonReport::build(&slots, &roster))
    }

    /// Swaps in a new roster after checking that ids are unique.
    pub fn replace_roster(&self, roster: Vec<Candidate>) -> Result<usize, RosterServiceError> {
        let mut seen = HashSet::with_capacity(roster.len());
        if let Some(duplicate) = roster.iter().find(|candidate| !seen.insert(candidate.id)) {
            return Err(RepositoryError::DuplicateId(duplicate.id).into());
        }
        let count = roster.len();
        self.repository.replace(roster)?;
        info!(candidates = count, "roster replaced");
        Ok(count)
    }
}

/// Error raised by the roster service.
#[derive(Debug, thiserror::Error)]
pub enum RosterServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("candidate {0} not found")]
    UnknownCandidate(CandidateId),
}
