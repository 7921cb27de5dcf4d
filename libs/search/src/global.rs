//! Global free-text search across the directory.
//!
//! One query fanned out over candidates, job openings and HR users, each
//! section independently toggleable. Results carry a highlighted display
//! line per section. Totals are per-section counts of the fetched page.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use startica_extract::normalize::fold;
use startica_models::{Candidate, HrUser, Opening};

use crate::config::SearchConfig;
use crate::mapper::{display_line, highlight_match};
use crate::sort::{SortKey, SortOrder};
use crate::store::{DirectoryStore, PageRequest};

/// Sort order for global search: by record date or by display name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlobalSortBy {
    #[default]
    Date,
    Name,
}

impl GlobalSortBy {
    /// Unknown names fall back to date order.
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            _ => Self::Date,
        }
    }

    pub fn resolve(self, ascending: bool) -> SortOrder {
        match self {
            Self::Date => SortOrder::by(SortKey::CreatedAt, ascending),
            Self::Name => {
                SortOrder::by(SortKey::FirstName, ascending).then(SortKey::LastName, ascending)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct GlobalSearchRequest {
    pub query: String,
    pub search_candidates: bool,
    pub search_openings: bool,
    pub search_users: bool,
    pub sort_by: GlobalSortBy,
    /// Defaults to descending (newest first).
    pub ascending: bool,
    pub page: u32,
    pub page_size: Option<u32>,
    /// Restricts candidate and opening hits to one HR user's records.
    pub owner: Option<i64>,
}

impl GlobalSearchRequest {
    /// All sections enabled, date order descending, first page.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_candidates: true,
            search_openings: true,
            search_users: true,
            sort_by: GlobalSortBy::Date,
            ascending: false,
            page: 1,
            page_size: None,
            owner: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSearchResult {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub current_package: Option<String>,
    pub status: String,
    pub highlighted_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningSearchResult {
    pub id: i64,
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub max_salary: Option<f64>,
    pub status: Option<String>,
    pub highlighted_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HrUserSearchResult {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub highlighted_text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSearchResponse {
    pub query: String,
    pub candidate_results: Vec<CandidateSearchResult>,
    pub opening_results: Vec<OpeningSearchResult>,
    pub hr_user_results: Vec<HrUserSearchResult>,
    pub total_candidates: u64,
    pub total_openings: u64,
    pub total_hr_users: u64,
    pub search_time_ms: u64,
}

pub struct GlobalSearch<D> {
    store: Arc<D>,
    config: SearchConfig,
}

impl<D: DirectoryStore> GlobalSearch<D> {
    pub fn new(store: Arc<D>) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    pub fn with_config(store: Arc<D>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    /// Run the fan-out. A failing section logs and stays empty; the other
    /// sections still return.
    pub async fn search(&self, request: GlobalSearchRequest) -> GlobalSearchResponse {
        let started = Instant::now();

        let query = fold(&request.query);
        let sort = request.sort_by.resolve(request.ascending);
        let size = request
            .page_size
            .unwrap_or(self.config.default_page_size)
            .clamp(1, self.config.max_page_size);
        let page = PageRequest::new(request.page.max(1), size);

        let mut response = GlobalSearchResponse {
            query: request.query.clone(),
            candidate_results: Vec::new(),
            opening_results: Vec::new(),
            hr_user_results: Vec::new(),
            total_candidates: 0,
            total_openings: 0,
            total_hr_users: 0,
            search_time_ms: 0,
        };

        if request.search_candidates {
            match self
                .store
                .search_candidates(&query, request.owner, &sort, page)
                .await
            {
                Ok(records) => {
                    response.total_candidates = records.len() as u64;
                    response.candidate_results = records
                        .iter()
                        .map(|record| map_candidate(record, &query))
                        .collect();
                }
                Err(error) => tracing::warn!(%error, "candidate section failed, left empty"),
            }
        }

        if request.search_openings {
            match self
                .store
                .search_openings(&query, request.owner, &sort, page)
                .await
            {
                Ok(records) => {
                    response.total_openings = records.len() as u64;
                    response.opening_results = records
                        .iter()
                        .map(|record| map_opening(record, &query))
                        .collect();
                }
                Err(error) => tracing::warn!(%error, "opening section failed, left empty"),
            }
        }

        if request.search_users {
            match self.store.search_users(&query, &sort, page).await {
                Ok(records) => {
                    response.total_hr_users = records.len() as u64;
                    response.hr_user_results = records
                        .iter()
                        .map(|record| map_user(record, &query))
                        .collect();
                }
                Err(error) => tracing::warn!(%error, "HR user section failed, left empty"),
            }
        }

        response.search_time_ms = started.elapsed().as_millis() as u64;
        response
    }
}

fn map_candidate(candidate: &Candidate, query: &str) -> CandidateSearchResult {
    let display = display_line(candidate);
    CandidateSearchResult {
        id: candidate.id,
        name: candidate.display_name(),
        email: candidate.email.clone(),
        skills: candidate.skills.clone(),
        experience: candidate.experience.clone(),
        current_package: candidate.current_package.clone(),
        status: candidate.status.as_str().to_string(),
        highlighted_text: highlight_match(&display, query),
    }
}

fn map_opening(opening: &Opening, query: &str) -> OpeningSearchResult {
    let display = format!(
        "{} - {}",
        opening.title.as_deref().unwrap_or_default(),
        opening.department.as_deref().unwrap_or_default()
    );
    OpeningSearchResult {
        id: opening.id,
        title: opening.title.clone(),
        department: opening.department.clone(),
        location: opening.location.clone(),
        skills: opening.skills.clone(),
        max_salary: opening.max_salary,
        status: opening.status.clone(),
        highlighted_text: highlight_match(&display, query),
    }
}

fn map_user(user: &HrUser, query: &str) -> HrUserSearchResult {
    let display = format!(
        "{} - {}",
        user.full_name.as_deref().unwrap_or_default(),
        user.email.as_deref().unwrap_or_default()
    );
    HrUserSearchResult {
        id: user.id,
        name: user.full_name.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        phone: user.phone.clone(),
        highlighted_text: highlight_match(&display, query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_defaults_to_date() {
        assert_eq!(GlobalSortBy::parse("date"), GlobalSortBy::Date);
        assert_eq!(GlobalSortBy::parse("relevance"), GlobalSortBy::Date);
        assert_eq!(GlobalSortBy::parse("name"), GlobalSortBy::Name);
    }
}
