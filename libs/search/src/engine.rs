//! Search orchestrator.
//!
//! Decides the evaluation strategy per request:
//! - No residual filters: storage returns exactly the requested page and the
//!   total count (one bounded call).
//! - Residual filters present: storage returns the full matching set, the
//!   residual pass runs per record, and pagination is applied to what
//!   survives so page numbers and counts stay accurate.
//!
//! `search` never fails. Internal errors degrade to an empty, zero-count
//! page carrying an error description.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use startica_models::Candidate;

use crate::config::SearchConfig;
use crate::filters::FilterSet;
use crate::mapper::{self, CandidateHit};
use crate::predicate;
use crate::sort::SortBy;
use crate::store::{CandidateStore, PageRequest};
use crate::{Error, Result};

/// One search invocation. Constructed fresh per call; the engine holds no
/// per-request state.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Free-text query, may be empty.
    pub query: String,
    pub filters: FilterSet,
    pub sort_by: SortBy,
    /// 1-based page number.
    pub page: u32,
    /// Absent sizes use the configured default.
    pub page_size: Option<u32>,
    /// Already-resolved access restriction; `None` means unrestricted.
    pub owner: Option<i64>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            ..Self::default()
        }
    }
}

/// The assembled result page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub results: Vec<CandidateHit>,
    pub total_count: u64,
    pub page: u32,
    pub total_pages: u32,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct SearchEngine<S> {
    store: Arc<S>,
    config: SearchConfig,
}

impl<S: CandidateStore> SearchEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    /// Run a search. Failures degrade to an empty page with `error` set and
    /// `total_pages = 0`; the caller is never handed an `Err`.
    pub async fn search(&self, request: SearchRequest) -> ResultPage {
        let started = Instant::now();
        match self.execute(&request).await {
            Ok((results, total_count, page_size)) => ResultPage {
                results,
                total_count,
                page: request.page,
                total_pages: total_pages(total_count, page_size),
                execution_time_ms: elapsed_ms(started),
                error: None,
            },
            Err(error) => {
                tracing::error!(%error, query = %request.query, "search degraded to empty result");
                degraded_page(request.page, error, started)
            }
        }
    }

    /// Run a search from a raw filter object, the shape the transport layer
    /// hands over. Filter parse failures follow the same degraded-result
    /// contract as everything else.
    pub async fn search_map(
        &self,
        query: &str,
        filters: &serde_json::Map<String, serde_json::Value>,
        sort_by: &str,
        page: u32,
        page_size: Option<u32>,
        owner: Option<i64>,
    ) -> ResultPage {
        let started = Instant::now();
        let filters = match FilterSet::from_map(filters) {
            Ok(filters) => filters,
            Err(error) => {
                tracing::error!(%error, "rejected filter object, search degraded to empty result");
                return degraded_page(page, error, started);
            }
        };
        self.search(SearchRequest {
            query: query.to_string(),
            filters,
            sort_by: SortBy::parse(sort_by),
            page,
            page_size,
            owner,
        })
        .await
    }

    async fn execute(&self, request: &SearchRequest) -> Result<(Vec<CandidateHit>, u64, u32)> {
        if request.page == 0 {
            return Err(Error::Validation("page numbers start at 1".to_string()));
        }
        let page_size = self.resolve_page_size(request.page_size)?;

        let (predicate, residual) = predicate::build(&request.query, &request.filters, request.owner);
        let sort = request.sort_by.resolve();

        let (records, total_count) = if residual.is_empty() {
            let page = self
                .store
                .find_page(&predicate, &sort, PageRequest::new(request.page, page_size))
                .await?;
            tracing::debug!(
                total = page.total,
                returned = page.records.len(),
                page = request.page,
                page_size,
                "storage-side pagination"
            );
            (page.records, page.total)
        } else {
            let matches = self.store.find_all(&predicate, &sort).await?;
            tracing::debug!(
                fetched = matches.len(),
                "full match set fetched for residual filtering"
            );

            let survivors: Vec<Candidate> = matches
                .into_iter()
                .filter(|candidate| residual.retains(candidate))
                .collect();
            let total = survivors.len() as u64;

            let page_request = PageRequest::new(request.page, page_size);
            let records: Vec<Candidate> = survivors
                .into_iter()
                .skip(page_request.offset())
                .take(page_size as usize)
                .collect();
            tracing::debug!(
                total,
                returned = records.len(),
                page = request.page,
                page_size,
                "in-memory pagination"
            );
            (records, total)
        };

        let results = records
            .iter()
            .map(|candidate| mapper::to_hit(candidate, &request.query))
            .collect();
        Ok((results, total_count, page_size))
    }

    fn resolve_page_size(&self, requested: Option<u32>) -> Result<u32> {
        match requested {
            None => Ok(self.config.default_page_size),
            Some(0) => Err(Error::Validation("page size must be at least 1".to_string())),
            Some(size) => {
                if size > self.config.max_page_size {
                    tracing::warn!(
                        requested = size,
                        max = self.config.max_page_size,
                        "clamping oversized page"
                    );
                }
                Ok(size.min(self.config.max_page_size))
            }
        }
    }
}

fn degraded_page(page: u32, error: Error, started: Instant) -> ResultPage {
    ResultPage {
        results: Vec::new(),
        total_count: 0,
        page,
        total_pages: 0,
        execution_time_ms: elapsed_ms(started),
        error: Some(error.to_string()),
    }
}

/// Ceil division, floored at one page even for zero matches.
fn total_pages(total_count: u64, page_size: u32) -> u32 {
    let pages = total_count.div_ceil(u64::from(page_size));
    pages.max(1) as u32
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_floors_at_one() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(41, 20), 3);
    }
}
