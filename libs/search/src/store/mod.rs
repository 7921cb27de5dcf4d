//! Storage collaborator interfaces.
//!
//! Persistence lives elsewhere; the engine only needs "find everything
//! matching a predicate, paginated and sorted". A search issues exactly one
//! storage call: either one bounded page, or one unbounded fetch when a
//! residual pass is needed. [`memory::MemoryStore`] is the in-process
//! reference implementation.

pub mod memory;

use async_trait::async_trait;
use startica_models::{Candidate, HrUser, Opening};

use crate::predicate::Predicate;
use crate::sort::SortOrder;
use crate::Result;

pub use memory::MemoryStore;

/// A page request, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Number of records before this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) as usize * self.size as usize
    }
}

/// One page of candidates plus the total match count across all pages.
#[derive(Debug, Clone, Default)]
pub struct CandidatePage {
    pub records: Vec<Candidate>,
    pub total: u64,
}

/// Candidate lookup by predicate.
///
/// A single call must observe a consistent snapshot; the engine holds no
/// transaction across calls.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// One page of matches, with the total count.
    async fn find_page(
        &self,
        predicate: &Predicate,
        sort: &SortOrder,
        page: PageRequest,
    ) -> Result<CandidatePage>;

    /// Every match, sorted. The unbounded variant of [`Self::find_page`].
    async fn find_all(&self, predicate: &Predicate, sort: &SortOrder) -> Result<Vec<Candidate>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Candidate>>;
}

/// Free-text lookups across the directory, used by global search.
///
/// The query matches case-insensitively against each entity's text columns.
/// The owner restriction is explicit; implementations must apply it inside
/// the lookup, not on the returned page.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    async fn search_candidates(
        &self,
        query: &str,
        owner: Option<i64>,
        sort: &SortOrder,
        page: PageRequest,
    ) -> Result<Vec<Candidate>>;

    async fn search_openings(
        &self,
        query: &str,
        owner: Option<i64>,
        sort: &SortOrder,
        page: PageRequest,
    ) -> Result<Vec<Opening>>;

    async fn search_users(
        &self,
        query: &str,
        sort: &SortOrder,
        page: PageRequest,
    ) -> Result<Vec<HrUser>>;
}
