use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use talent_board::config::InterviewFeedConfig;
use talent_board::error::AppError;
use talent_board::workflows::candidates::fixtures::sample_roster;
use talent_board::workflows::candidates::{
    Candidate, CandidateCsvImporter, CandidateId, CandidateRepository, RepositoryError,
    RosterService,
};
use talent_board::workflows::interviews::{FeedError, InterviewFeedClient};
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateRepository {
    roster: Arc<Mutex<Vec<Candidate>>>,
}

impl InMemoryCandidateRepository {
    fn guard(&self) -> Result<MutexGuard<'_, Vec<Candidate>>, RepositoryError> {
        self.roster
            .lock()
            .map_err(|_| RepositoryError::Unavailable("roster mutex poisoned".to_string()))
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn roster(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self.guard()?.clone())
    }

    fn fetch(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.iter().find(|candidate| candidate.id == id).cloned())
    }

    fn replace(&self, roster: Vec<Candidate>) -> Result<(), RepositoryError> {
        *self.guard()? = roster;
        Ok(())
    }
}

/// Roster from a CSV export when one is given, otherwise the bundled sample.
pub(crate) fn load_roster(csv: Option<&Path>) -> Result<Vec<Candidate>, AppError> {
    match csv {
        Some(path) => {
            let roster = CandidateCsvImporter::from_path(path)?;
            info!(path = %path.display(), candidates = roster.len(), "roster imported");
            Ok(roster)
        }
        None => Ok(sample_roster()),
    }
}

/// Service over an in-memory repository, populated through `replace_roster` so the roster
/// passes the same duplicate-id check as any later reload.
pub(crate) fn roster_service(
    csv: Option<&Path>,
) -> Result<RosterService<InMemoryCandidateRepository>, AppError> {
    let service = RosterService::new(Arc::new(InMemoryCandidateRepository::default()));
    service.replace_roster(load_roster(csv)?)?;
    Ok(service)
}

/// Feed client plus the company id used when a request does not name one.
#[derive(Clone, Default)]
pub(crate) struct InterviewFeedState {
    pub(crate) client: Option<InterviewFeedClient>,
    pub(crate) default_company_id: Option<String>,
}

impl InterviewFeedState {
    pub(crate) fn from_config(config: &InterviewFeedConfig) -> Self {
        let client = match InterviewFeedClient::from_config(config) {
            Ok(client) => {
                info!(endpoint = client.endpoint(), "interview feed configured");
                Some(client)
            }
            Err(FeedError::MissingEndpoint) => None,
            Err(error) => {
                warn!(%error, "interview feed client could not be built");
                None
            }
        };
        Self {
            client,
            default_company_id: config.company_id.clone(),
        }
    }

    pub(crate) fn company_id(&self, requested: Option<String>) -> Result<String, AppError> {
        requested
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .or_else(|| self.default_company_id.clone())
            .ok_or(AppError::MissingCompanyId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_id_prefers_request_over_configured_default() {
        let state = InterviewFeedState {
            client: None,
            default_company_id: Some("acme".to_string()),
        };
        assert_eq!(state.company_id(Some(" globex ".to_string())).expect("id"), "globex");
        assert_eq!(state.company_id(Some(String::new())).expect("id"), "acme");
        assert!(matches!(
            InterviewFeedState::default().company_id(None),
            Err(AppError::MissingCompanyId)
        ));
    }

    #[test]
    fn roster_service_starts_from_sample_roster() {
        let service = roster_service(None).expect("service builds");
        let everyone = service
            .list(&talent_board::workflows::candidates::RosterQuery::default())
            .expect("list");
        assert_eq!(everyone.roster_size, sample_roster().len());
    }

    #[test]
    fn roster_service_rejects_csv_with_duplicate_ids() {
        let path = std::env::temp_dir().join(format!(
            "talent-board-duplicates-{}.csv",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "id,name,position,date,status,score\n\
1,Ada,QA Engineer,2023-05-15,Pending,70\n\
1,Grace,QA Engineer,2023-05-16,Pending,75\n",
        )
        .expect("write csv");
        let result = roster_service(Some(&path));
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AppError::Import(_))));
    }

    #[test]
    fn repository_replaces_roster_wholesale() {
        let repository = InMemoryCandidateRepository::default();
        repository.replace(sample_roster()).expect("seed");
        let first = repository.roster().expect("roster")[0].clone();
        repository.replace(vec![first.clone()]).expect("replace");
        assert_eq!(repository.roster().expect("roster"), vec![first]);
        assert!(repository.fetch(CandidateId(2)).expect("fetch").is_none());
    }
}
