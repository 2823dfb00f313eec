use super::domain::{Candidate, CandidateId};

/// Storage abstraction so the roster service can be exercised in isolation.
///
/// Implementations hand out snapshots; the roster is swapped wholesale through
/// `replace`, never edited in place.
pub trait CandidateRepository: Send + Sync {
    fn roster(&self) -> Result<Vec<Candidate>, RepositoryError>;
    fn fetch(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    fn replace(&self, roster: Vec<Candidate>) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("candidate {0} appears more than once")]
    DuplicateId(CandidateId),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
