//! Storage-evaluable filtering through the full engine.

mod support;

use std::sync::Arc;

use serde_json::json;
use startica_models::CandidateStatus;
use startica_search::store::MemoryStore;
use startica_search::{SearchEngine, SearchRequest};
use support::CandidateBuilder;

fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.insert_candidate(
        CandidateBuilder::new(1)
            .name("Asha", "Rao")
            .email("asha@example.com")
            .skills("Java, Spring Boot, SQL")
            .location("Pune")
            .degree("B.Tech")
            .passing_year(2019)
            .status(CandidateStatus::Interested)
            .owned_by(7)
            .employment_history(r#"{"company":"Acme"}"#)
            .updated_later_by(30)
            .build(),
    );
    store.insert_candidate(
        CandidateBuilder::new(2)
            .name("Bilal", "Khan")
            .email("bilal@example.com")
            .skills("Java")
            .location("Mumbai")
            .degree("MCA")
            .passing_year(2021)
            .status(CandidateStatus::Pending)
            .owned_by(8)
            .employment_history("no")
            .updated_later_by(20)
            .build(),
    );
    store.insert_candidate(
        CandidateBuilder::new(3)
            .name("Chitra", "Iyer")
            .email("chitra@example.com")
            .skills("Python, SQL")
            .location("Pune")
            .degree("B.Tech")
            .passing_year(2017)
            .status(CandidateStatus::Hired)
            .owned_by(7)
            .employment_history("yes")
            .updated_later_by(10)
            .build(),
    );
    Arc::new(store)
}

fn engine() -> SearchEngine<MemoryStore> {
    SearchEngine::new(seeded_store())
}

fn ids(page: &startica_search::ResultPage) -> Vec<i64> {
    page.results.iter().map(|hit| hit.id).collect()
}

#[tokio::test]
async fn free_text_query_spans_fields() {
    let page = engine().search(SearchRequest::new("sql")).await;
    assert_eq!(page.total_count, 2);
    assert_eq!(ids(&page), vec![1, 3]);
    assert!(page.error.is_none());
}

#[tokio::test]
async fn skill_match_all_vs_any() {
    let filters = json!({"primarySkills": ["java", "sql"], "skillMatchType": "ALL"});
    let page = engine()
        .search_map("", filters.as_object().unwrap(), "latest", 1, None, None)
        .await;
    // Candidate 2 has only java; ALL excludes it.
    assert_eq!(ids(&page), vec![1]);

    let filters = json!({"primarySkills": ["java", "sql"], "skillMatchType": "ANY"});
    let page = engine()
        .search_map("", filters.as_object().unwrap(), "latest", 1, None, None)
        .await;
    assert_eq!(page.total_count, 3);
}

#[tokio::test]
async fn employment_history_yes_includes_json_blobs() {
    let filters = json!({"employmentHistory": ["yes"]});
    let page = engine()
        .search_map("", filters.as_object().unwrap(), "latest", 1, None, None)
        .await;
    // The JSON blob (1) and the literal "yes" (3); "no" (2) stays out.
    assert_eq!(ids(&page), vec![1, 3]);
}

#[tokio::test]
async fn status_and_degree_filters() {
    let filters = json!({"applicationStatus": ["HIRED"]});
    let page = engine()
        .search_map("", filters.as_object().unwrap(), "latest", 1, None, None)
        .await;
    assert_eq!(ids(&page), vec![3]);

    // Degree matches are exact, so case matters.
    let filters = json!({"degree": ["B.Tech"]});
    let page = engine()
        .search_map("", filters.as_object().unwrap(), "latest", 1, None, None)
        .await;
    assert_eq!(page.total_count, 2);

    let filters = json!({"degree": ["b.tech"]});
    let page = engine()
        .search_map("", filters.as_object().unwrap(), "latest", 1, None, None)
        .await;
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn passing_year_needs_both_bounds() {
    let filters = json!({"minPassingYear": 2018, "maxPassingYear": 2021});
    let page = engine()
        .search_map("", filters.as_object().unwrap(), "latest", 1, None, None)
        .await;
    assert_eq!(ids(&page), vec![1, 2]);

    // A single bound never forms a range.
    let filters = json!({"minPassingYear": 2018});
    let page = engine()
        .search_map("", filters.as_object().unwrap(), "latest", 1, None, None)
        .await;
    assert_eq!(page.total_count, 3);
}

#[tokio::test]
async fn owner_restriction_limits_results() {
    let mut request = SearchRequest::new("");
    request.owner = Some(7);
    let page = engine().search(request).await;
    assert_eq!(ids(&page), vec![1, 3]);

    let mut request = SearchRequest::new("java");
    request.owner = Some(8);
    let page = engine().search(request).await;
    assert_eq!(ids(&page), vec![2]);
}

#[tokio::test]
async fn unknown_filter_degrades_to_error_page() {
    let filters = json!({"locatoins": ["Pune"]});
    let page = engine()
        .search_map("", filters.as_object().unwrap(), "latest", 1, None, None)
        .await;
    assert!(page.results.is_empty());
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.error.as_deref().unwrap().contains("locatoins"));
}

#[tokio::test]
async fn name_sort_orders_by_first_then_last() {
    let filters = json!({});
    let page = engine()
        .search_map("", filters.as_object().unwrap(), "name", 1, None, None)
        .await;
    assert_eq!(ids(&page), vec![1, 2, 3]);
}
