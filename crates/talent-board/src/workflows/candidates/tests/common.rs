use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::candidates::domain::{
    Candidate, CandidateId, CandidateStatus, FilterOptions, Score,
};
use crate::workflows::candidates::fixtures::sample_roster;
use crate::workflows::candidates::repository::{CandidateRepository, RepositoryError};
use crate::workflows::candidates::service::RosterService;

pub(super) fn roster() -> Vec<Candidate> {
    sample_roster()
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn candidate(id: u32, name: &str, score: u8) -> Candidate {
    Candidate {
        id: CandidateId(id),
        name: name.to_string(),
        position: "Platform Engineer".to_string(),
        date: date(2024, 3, 1),
        status: CandidateStatus::Pending,
        score: Score::new(score).expect("valid score"),
    }
}

pub(super) fn default_filters() -> FilterOptions {
    FilterOptions::default()
}

pub(super) fn ids(candidates: &[&Candidate]) -> Vec<u32> {
    candidates.iter().map(|candidate| candidate.id.0).collect()
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    roster: Arc<Mutex<Vec<Candidate>>>,
}

impl MemoryRepository {
    pub(super) fn seeded(roster: Vec<Candidate>) -> Self {
        Self {
            roster: Arc::new(Mutex::new(roster)),
        }
    }
}

impl CandidateRepository for MemoryRepository {
    fn roster(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self.roster.lock().expect("roster mutex poisoned").clone())
    }

    fn fetch(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.roster.lock().expect("roster mutex poisoned");
        Ok(guard.iter().find(|candidate| candidate.id == id).cloned())
    }

    fn replace(&self, roster: Vec<Candidate>) -> Result<(), RepositoryError> {
        *self.roster.lock().expect("roster mutex poisoned") = roster;
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl CandidateRepository for UnavailableRepository {
    fn roster(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn replace(&self, _roster: Vec<Candidate>) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (RosterService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::seeded(roster());
    let service = RosterService::new(Arc::new(repository.clone()));
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
