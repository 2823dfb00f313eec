use talent_board::workflows::candidates::{
    fixtures::sample_roster, CandidateId, CandidateStatus, ComparisonReport, ComparisonSlots,
    FilterOptions, Recommendation, RosterQuery, RosterQueryParams, SortDirection, SortField,
    SortState, StatusFilter,
};

#[test]
fn query_params_drive_filter_then_sort() {
    let roster = sample_roster();
    let query = RosterQueryParams {
        status: Some("selected".to_string()),
        min_score: Some("86".to_string()),
        sort: Some("name".to_string()),
        direction: Some("desc".to_string()),
        ..Default::default()
    }
    .into_query()
    .expect("params parse");

    let names: Vec<&str> = query
        .apply(&roster)
        .into_iter()
        .map(|candidate| candidate.name.as_str())
        .collect();
    assert_eq!(names, ["Sarah Brown", "Emily Davis"]);
}

#[test]
fn search_matches_numbers_status_and_dates() {
    let roster = sample_roster();

    let by_score = RosterQuery {
        search: "85".to_string(),
        ..RosterQuery::default()
    };
    assert_eq!(by_score.view(&roster).candidates[0].name, "John Doe");
    assert_eq!(by_score.view(&roster).total, 1);

    let by_status = RosterQuery {
        search: "PENDING".to_string(),
        ..RosterQuery::default()
    };
    assert!(by_status
        .apply(&roster)
        .iter()
        .all(|candidate| candidate.status == CandidateStatus::Pending));

    let by_date = RosterQuery {
        search: "2023-05-18".to_string(),
        ..RosterQuery::default()
    };
    assert_eq!(by_date.view(&roster).candidates[0].id, CandidateId(4));
}

#[test]
fn inverted_score_bounds_produce_empty_view() {
    let roster = sample_roster();
    let query = RosterQuery {
        filters: FilterOptions {
            min_score: 95,
            max_score: 60,
            ..FilterOptions::default()
        },
        ..RosterQuery::default()
    };
    let view = query.view(&roster);
    assert!(view.is_empty());
    assert_eq!(view.roster_size, roster.len());
}

#[test]
fn header_toggling_reorders_the_view() {
    let roster = sample_roster();
    let mut query = RosterQuery {
        status: StatusFilter::Only(CandidateStatus::Rejected),
        ..RosterQuery::default()
    };

    query.sort = query.sort.toggle(SortField::Score);
    assert_eq!(query.sort, SortState::new(SortField::Score, SortDirection::Asc));
    let ascending: Vec<u32> = query.apply(&roster).iter().map(|c| c.id.0).collect();
    assert_eq!(ascending, [2, 7]);

    query.sort = query.sort.toggle(SortField::Score);
    let descending: Vec<u32> = query.apply(&roster).iter().map(|c| c.id.0).collect();
    assert_eq!(descending, [7, 2]);
}

#[test]
fn comparison_panel_flow_reaches_a_recommendation() {
    let roster = sample_roster();
    let mut slots = ComparisonSlots::new();

    slots.select(0, Some(CandidateId(4)), &roster);
    let partial = ComparisonReport::build(&slots, &roster);
    assert_eq!(partial.recommendation, Recommendation::NeedsMoreCandidates);

    slots.select(1, Some(CandidateId(2)), &roster);
    let report = ComparisonReport::build(&slots, &roster);
    assert_eq!(
        report.recommendation_text,
        "Emily Davis leads by 25 points and may be the stronger candidate."
    );

    slots.add_slot();
    slots.select(2, Some(CandidateId(6)), &roster);
    let report = ComparisonReport::build(&slots, &roster);
    assert_eq!(report.recommendation, Recommendation::CloselyMatched);

    assert!(slots.remove_slot(0));
    assert!(slots.remove_slot(0));
    assert!(!slots.remove_slot(0));
    assert_eq!(slots.len(), 1);
}
