use super::common::*;
use crate::candidates::directory::{CandidateQuery, DirectoryError, SortBy, SortOrder};

fn ids(page: &crate::candidates::directory::CandidatePage) -> Vec<usize> {
    page.candidates.iter().map(|record| record.id).collect()
}

#[test]
fn default_query_sorts_by_score_descending() {
    let directory = directory();
    let page = directory.query(&CandidateQuery::default());

    assert_eq!(ids(&page), vec![4, 0, 1, 3, 2]);
    assert_eq!(page.pagination.total, 5);
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.total_pages, 1);
}

#[test]
fn search_covers_skills_roles_and_companies() {
    let directory = directory();

    let by_skill = directory.query(&CandidateQuery {
        search: Some("postgre".to_string()),
        ..CandidateQuery::default()
    });
    assert_eq!(ids(&by_skill), vec![0]);

    let by_company = directory.query(&CandidateQuery {
        search: Some("GLOBEX".to_string()),
        ..CandidateQuery::default()
    });
    assert_eq!(ids(&by_company), vec![1]);

    let by_role = directory.query(&CandidateQuery {
        search: Some("graphic designer".to_string()),
        ..CandidateQuery::default()
    });
    assert_eq!(ids(&by_role), vec![2]);
}

#[test]
fn score_bounds_filter_candidates() {
    let directory = directory();
    let page = directory.query(&CandidateQuery {
        min_score: Some(40.0),
        ..CandidateQuery::default()
    });
    assert_eq!(ids(&page), vec![4, 0, 1]);

    let narrow = directory.query(&CandidateQuery {
        min_score: Some(40.0),
        max_score: Some(90.0),
        ..CandidateQuery::default()
    });
    assert_eq!(ids(&narrow), vec![0, 1]);
}

#[test]
fn salary_bounds_exclude_unparsable_expectations() {
    let directory = directory();
    let page = directory.query(&CandidateQuery {
        min_salary: Some(100_000),
        ..CandidateQuery::default()
    });
    // Mia's "Negotiable" never qualifies for a salary-bounded query.
    assert_eq!(ids(&page), vec![4, 1]);
}

#[test]
fn location_filter_is_substring_and_ignores_all() {
    let directory = directory();

    let new_york = directory.query(&CandidateQuery {
        location: Some("new york".to_string()),
        ..CandidateQuery::default()
    });
    assert_eq!(ids(&new_york), vec![0, 2]);

    let everywhere = directory.query(&CandidateQuery {
        location: Some("all".to_string()),
        ..CandidateQuery::default()
    });
    assert_eq!(everywhere.pagination.total, 5);
}

#[test]
fn sorting_by_name_salary_and_experience() {
    let directory = directory();

    let by_name = directory.query(&CandidateQuery {
        sort_by: SortBy::Name,
        sort_order: SortOrder::Asc,
        ..CandidateQuery::default()
    });
    assert_eq!(ids(&by_name), vec![0, 4, 3, 2, 1]);

    let by_salary = directory.query(&CandidateQuery {
        sort_by: SortBy::Salary,
        ..CandidateQuery::default()
    });
    assert_eq!(ids(&by_salary), vec![1, 4, 0, 3, 2]);

    let by_experience = directory.query(&CandidateQuery {
        sort_by: SortBy::Experience,
        ..CandidateQuery::default()
    });
    assert_eq!(by_experience.candidates[0].id, 4);
}

#[test]
fn pagination_slices_and_reports_totals() {
    let directory = directory();
    let page = directory.query(&CandidateQuery {
        limit: 2,
        page: 2,
        ..CandidateQuery::default()
    });

    assert_eq!(ids(&page), vec![1, 3]);
    assert_eq!(page.pagination.total, 5);
    assert_eq!(page.pagination.limit, 2);
    assert_eq!(page.pagination.total_pages, 3);

    let past_the_end = directory.query(&CandidateQuery {
        limit: 2,
        page: 4,
        ..CandidateQuery::default()
    });
    assert!(past_the_end.candidates.is_empty());
}

#[test]
fn get_returns_records_by_positional_id() {
    let directory = directory();
    let record = directory.get(2).expect("known id");
    assert_eq!(record.candidate.name.as_deref(), Some("Mia Torres"));
    assert!(directory.get(99).is_none());
}

#[test]
fn stats_aggregate_the_whole_collection() {
    let directory = directory();
    let stats = directory.stats();

    assert_eq!(stats.total, 5);
    assert_eq!(stats.avg_score, 47.8);
    assert_eq!(stats.max_score, 96.5);
    assert_eq!(stats.min_score, 11.5);
    assert_eq!(stats.distribution.excellent, 1);
    assert_eq!(stats.distribution.good, 1);
    assert_eq!(stats.distribution.average, 1);
    assert_eq!(stats.distribution.below, 2);
    assert_eq!(stats.top_locations[0].location, "New York");
    assert_eq!(stats.top_locations[0].count, 2);
    // Mean of the four parsable expectations.
    assert_eq!(stats.avg_salary, 106_250);
}

#[test]
fn empty_directory_yields_zeroed_stats() {
    let directory = crate::candidates::directory::CandidateDirectory::load(
        crate::candidates::source::StaticSource::default(),
    )
    .expect("empty source loads");

    let stats = directory.stats();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.avg_score, 0.0);
    assert!(stats.top_locations.is_empty());
    assert_eq!(stats.avg_salary, 0);
}

#[test]
fn selection_requires_exactly_five_distinct_known_ids() {
    let directory = directory();

    match directory.save_selection(shortlist(&[0, 1, 2])) {
        Err(DirectoryError::ShortlistSize(3)) => {}
        other => panic!("expected shortlist size error, got {other:?}"),
    }

    match directory.save_selection(shortlist(&[0, 0, 1, 2, 3])) {
        Err(DirectoryError::DuplicateCandidate(0)) => {}
        other => panic!("expected duplicate error, got {other:?}"),
    }

    match directory.save_selection(shortlist(&[0, 1, 2, 3, 9])) {
        Err(DirectoryError::UnknownCandidate(9)) => {}
        other => panic!("expected unknown candidate error, got {other:?}"),
    }
}

#[test]
fn selection_round_trips_and_last_write_wins() {
    let directory = directory();

    let before = directory.current_selection();
    assert!(before.selected_candidates.is_empty());
    assert!(before.timestamp.is_none());

    let first = directory
        .save_selection(shortlist(&[0, 1, 2, 3, 4]))
        .expect("valid shortlist saves");
    assert!(first.timestamp.is_some());
    assert_eq!(directory.current_selection(), first);

    let second = directory
        .save_selection(shortlist(&[4, 3, 2, 1, 0]))
        .expect("valid shortlist saves");
    assert_eq!(
        directory.current_selection().selected_candidates,
        second.selected_candidates
    );
}

#[test]
fn refresh_recomputes_the_collection() {
    let directory = directory();
    let total = directory.refresh().expect("static source reloads");
    assert_eq!(total, 5);
    assert_eq!(directory.total(), 5);
    assert_eq!(
        directory.get(0).expect("record survives refresh").candidate.name.as_deref(),
        Some("Ava Chen")
    );
}

#[test]
fn csv_export_contains_header_and_every_record() {
    let directory = directory();
    let bytes = directory.export_csv().expect("export succeeds");
    let text = String::from_utf8(bytes).expect("utf8 csv");

    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,email,phone,location,total_score,experience,education,skills,salary,availability,expected_salary")
    );
    assert_eq!(lines.count(), 5);
    assert!(text.contains("Ava Chen"));
    assert!(text.contains("96.5"));
}
