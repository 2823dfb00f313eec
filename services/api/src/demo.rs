use crate::infra::roster_service;
use clap::Args;
use std::path::PathBuf;
use talent_board::config::AppConfig;
use talent_board::error::AppError;
use talent_board::telemetry;
use talent_board::workflows::candidates::{
    Candidate, CandidateId, CandidateStatus, ComparisonReport, ComparisonSlots, RosterQuery,
    RosterQueryParams, RosterView, SortDirection, SortField, SortState, StatusFilter,
};
use talent_board::workflows::interviews::{
    arrange_rows, default_row_sort, InterviewFeedClient, InterviewRow,
};

#[derive(Args, Debug, Default)]
pub(crate) struct RosterListArgs {
    /// Load the roster from a CSV export instead of the sample roster
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Case-insensitive text matched against every candidate field
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Selected, Rejected, Pending, or all
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Exact position title
    #[arg(long)]
    pub(crate) position: Option<String>,
    /// Minimum score; non-numeric input means 0
    #[arg(long)]
    pub(crate) min_score: Option<String>,
    /// Maximum score; non-numeric input means 100
    #[arg(long)]
    pub(crate) max_score: Option<String>,
    /// Earliest interview date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) from: Option<String>,
    /// Latest interview date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) to: Option<String>,
    /// Column to sort by: id, name, position, date, status, score
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// asc or desc
    #[arg(long)]
    pub(crate) direction: Option<String>,
}

impl RosterListArgs {
    fn query_params(&self) -> RosterQueryParams {
        RosterQueryParams {
            search: self.search.clone(),
            status: self.status.clone(),
            position: self.position.clone(),
            min_score: self.min_score.clone(),
            max_score: self.max_score.clone(),
            start: self.from.clone(),
            end: self.to.clone(),
            sort: self.sort.clone(),
            direction: self.direction.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RosterCompareArgs {
    /// Load the roster from a CSV export instead of the sample roster
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Candidate id to place in a comparison slot (repeatable)
    #[arg(long = "id", required = true)]
    pub(crate) ids: Vec<u32>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct InterviewsFetchArgs {
    /// Company whose interviews are fetched (defaults to INTERVIEW_COMPANY_ID)
    #[arg(long)]
    pub(crate) company_id: Option<String>,
    /// Feed endpoint (defaults to INTERVIEW_FEED_URL)
    #[arg(long)]
    pub(crate) endpoint: Option<String>,
    /// Case-insensitive text matched against every row field
    #[arg(long)]
    pub(crate) search: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Run the demo against a CSV export instead of the sample roster
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_roster_list(args: RosterListArgs) -> Result<(), AppError> {
    let query = args.query_params().into_query()?;
    let service = roster_service(args.csv.as_deref())?;
    let view = service.list(&query)?;
    render_roster(&view);
    Ok(())
}

pub(crate) fn run_roster_compare(args: RosterCompareArgs) -> Result<(), AppError> {
    let service = roster_service(args.csv.as_deref())?;
    let ids: Vec<Option<CandidateId>> = args.ids.into_iter().map(|id| Some(CandidateId(id))).collect();
    let report = service.compare(&ids)?;
    render_comparison(&report);
    Ok(())
}

pub(crate) async fn run_interviews_fetch(args: InterviewsFetchArgs) -> Result<(), AppError> {
    let InterviewsFetchArgs {
        company_id,
        endpoint,
        search,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(endpoint) = endpoint {
        config.interviews.endpoint = Some(endpoint);
    }
    if let Some(company_id) = company_id {
        config.interviews.company_id = Some(company_id);
    }

    telemetry::init(&config.telemetry)?;

    let company_id = config
        .interviews
        .company_id
        .clone()
        .ok_or(AppError::MissingCompanyId)?;
    let client = InterviewFeedClient::from_config(&config.interviews)?;
    let rows = client.fetch_or_empty(&company_id).await;
    let arranged = arrange_rows(&rows, search.as_deref().unwrap_or_default(), default_row_sort());
    render_interviews(&company_id, &arranged);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = roster_service(args.csv.as_deref())?;

    println!("Talent board demo");
    let everyone = service.list(&RosterQuery::default())?;
    render_roster(&everyone);
    let roster = everyone.candidates;

    let mut query = RosterQuery {
        status: StatusFilter::Only(CandidateStatus::Pending),
        sort: SortState::new(SortField::Score, SortDirection::Desc),
        ..RosterQuery::default()
    };
    println!("\nPending candidates, strongest first");
    render_roster(&service.list(&query)?);

    query.sort = query.sort.toggle(SortField::Score);
    println!("\nSame filter after clicking the score header again");
    render_roster(&service.list(&query)?);

    let positions = service.positions()?;
    println!("\nPositions on the roster: {}", positions.join(", "));

    let mut by_score: Vec<&Candidate> = roster.iter().collect();
    by_score.sort_by(|a, b| b.score.cmp(&a.score));

    let mut slots = ComparisonSlots::new();
    for (index, candidate) in by_score.iter().take(slots.len()).enumerate() {
        slots.select(index, Some(candidate.id), &roster);
    }
    println!("\nComparing the two highest scores");
    render_comparison(&ComparisonReport::build(&slots, &roster));

    if let Some(last) = by_score.last() {
        slots.add_slot();
        slots.select(slots.len() - 1, Some(last.id), &roster);
        println!("\nAdding the lowest score to the comparison");
        render_comparison(&ComparisonReport::build(&slots, &roster));
    }

    Ok(())
}

fn render_roster(view: &RosterView) {
    let marker = match view.sort.direction {
        SortDirection::Asc => "^",
        SortDirection::Desc => "v",
    };
    println!(
        "Showing {} of {} candidates (sorted by {} {})",
        view.total, view.roster_size, view.sort.field, marker
    );
    if view.is_empty() {
        println!("  No candidates match the current filters.");
        return;
    }
    println!(
        "  {:<4} {:<18} {:<22} {:<10} {:<9} {:>5}",
        "ID", "Name", "Position", "Date", "Status", "Score"
    );
    for candidate in &view.candidates {
        println!(
            "  {:<4} {:<18} {:<22} {:<10} {:<9} {:>5} ({})",
            candidate.id.to_string(),
            candidate.name,
            candidate.position,
            candidate.date.format("%Y-%m-%d").to_string(),
            candidate.status.label(),
            candidate.score.value(),
            candidate.score.band().label()
        );
    }
}

fn render_comparison(report: &ComparisonReport) {
    for candidate in &report.candidates {
        println!(
            "  [{}] {:<18} {:<22} score {:>3}  {}",
            candidate.initials(),
            candidate.name,
            candidate.position,
            candidate.score.value(),
            candidate.status
        );
    }
    println!("  Recommendation: {}", report.recommendation_text);
}

fn render_interviews(company_id: &str, rows: &[InterviewRow]) {
    println!("Interviews for company {company_id}: {} rows", rows.len());
    if rows.is_empty() {
        println!("  No interviews found.");
        return;
    }
    println!(
        "  {:<12} {:>7} {:<10} {:<28} {}",
        "Candidate", "Job", "Status", "Title", "Posted"
    );
    for row in rows {
        println!(
            "  {:<12} {:>7} {:<10} {:<28} {}",
            row.candidate_id,
            row.job_label(),
            row.status_label(),
            row.title,
            row.posted_on
        );
    }
}
