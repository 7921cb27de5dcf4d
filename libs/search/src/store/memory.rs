//! In-memory store.
//!
//! Reference implementation of the storage interfaces: predicates are
//! evaluated with [`Predicate::matches`], sorting and pagination happen over
//! a snapshot taken per call. Backs the test suite and small embedded
//! deployments.

use std::cmp::Ordering;
use std::sync::RwLock;

use async_trait::async_trait;
use startica_extract::normalize::contains_fold;
use startica_models::{Candidate, HrUser, Opening};

use super::{CandidatePage, CandidateStore, DirectoryStore, PageRequest};
use crate::predicate::Predicate;
use crate::sort::{SortKey, SortOrder};
use crate::Result;

#[derive(Default)]
pub struct MemoryStore {
    candidates: RwLock<Vec<Candidate>>,
    openings: RwLock<Vec<Opening>>,
    users: RwLock<Vec<HrUser>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_candidate(&self, candidate: Candidate) {
        self.candidates
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(candidate);
    }

    pub fn insert_opening(&self, opening: Opening) {
        self.openings
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(opening);
    }

    pub fn insert_user(&self, user: HrUser) {
        self.users
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(user);
    }

    fn matching_candidates(&self, predicate: &Predicate, sort: &SortOrder) -> Vec<Candidate> {
        let mut matches: Vec<Candidate> = self
            .candidates
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|candidate| predicate.matches(candidate))
            .cloned()
            .collect();
        matches.sort_by(|a, b| compare_candidates(a, b, sort));
        matches
    }
}

fn page_of<T>(records: Vec<T>, page: PageRequest) -> Vec<T> {
    records
        .into_iter()
        .skip(page.offset())
        .take(page.size as usize)
        .collect()
}

fn compare_opt_str(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.unwrap_or("").cmp(b.unwrap_or(""))
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

fn compare_candidates(a: &Candidate, b: &Candidate, sort: &SortOrder) -> Ordering {
    for term in &sort.terms {
        let ordering = match term.key {
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            // Raw string order, as a text column sorts.
            SortKey::Experience => {
                compare_opt_str(a.experience.as_deref(), b.experience.as_deref())
            }
            SortKey::CurrentPackage => {
                compare_opt_str(a.current_package.as_deref(), b.current_package.as_deref())
            }
            SortKey::FirstName => compare_opt_str(a.first_name.as_deref(), b.first_name.as_deref()),
            SortKey::LastName => compare_opt_str(a.last_name.as_deref(), b.last_name.as_deref()),
        };
        let ordering = directed(ordering, term.ascending);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    // Deterministic tail so pagination never shuffles ties.
    a.id.cmp(&b.id)
}

fn compare_openings(a: &Opening, b: &Opening, sort: &SortOrder) -> Ordering {
    for term in &sort.terms {
        let ordering = match term.key {
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            // Name-style sorts map onto the opening's leading display fields.
            SortKey::FirstName => compare_opt_str(a.title.as_deref(), b.title.as_deref()),
            SortKey::LastName => compare_opt_str(a.department.as_deref(), b.department.as_deref()),
            _ => Ordering::Equal,
        };
        let ordering = directed(ordering, term.ascending);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.id.cmp(&b.id)
}

fn compare_users(a: &HrUser, b: &HrUser, sort: &SortOrder) -> Ordering {
    for term in &sort.terms {
        let ordering = match term.key {
            SortKey::UpdatedAt | SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::FirstName => compare_opt_str(a.full_name.as_deref(), b.full_name.as_deref()),
            _ => Ordering::Equal,
        };
        let ordering = directed(ordering, term.ascending);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.id.cmp(&b.id)
}

fn candidate_text_matches(candidate: &Candidate, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    [
        candidate.first_name.as_deref(),
        candidate.last_name.as_deref(),
        candidate.email.as_deref(),
        candidate.phone.as_deref(),
        candidate.skills.as_deref(),
        candidate.profile.as_deref(),
        candidate.company.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|text| contains_fold(text, query))
}

fn opening_text_matches(opening: &Opening, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    [
        opening.title.as_deref(),
        opening.department.as_deref(),
        opening.location.as_deref(),
        opening.skills.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|text| contains_fold(text, query))
}

fn user_text_matches(user: &HrUser, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    [
        user.full_name.as_deref(),
        user.email.as_deref(),
        user.phone.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|text| contains_fold(text, query))
}

#[async_trait]
impl CandidateStore for MemoryStore {
    async fn find_page(
        &self,
        predicate: &Predicate,
        sort: &SortOrder,
        page: PageRequest,
    ) -> Result<CandidatePage> {
        let matches = self.matching_candidates(predicate, sort);
        let total = matches.len() as u64;
        Ok(CandidatePage {
            records: page_of(matches, page),
            total,
        })
    }

    async fn find_all(&self, predicate: &Predicate, sort: &SortOrder) -> Result<Vec<Candidate>> {
        Ok(self.matching_candidates(predicate, sort))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Candidate>> {
        Ok(self
            .candidates
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|candidate| candidate.id == id)
            .cloned())
    }
}

#[async_trait]
impl DirectoryStore for MemoryStore {
    async fn search_candidates(
        &self,
        query: &str,
        owner: Option<i64>,
        sort: &SortOrder,
        page: PageRequest,
    ) -> Result<Vec<Candidate>> {
        let mut matches: Vec<Candidate> = self
            .candidates
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|candidate| candidate_text_matches(candidate, query))
            .filter(|candidate| owner.is_none() || candidate.source_hr_id == owner)
            .cloned()
            .collect();
        matches.sort_by(|a, b| compare_candidates(a, b, sort));
        Ok(page_of(matches, page))
    }

    async fn search_openings(
        &self,
        query: &str,
        owner: Option<i64>,
        sort: &SortOrder,
        page: PageRequest,
    ) -> Result<Vec<Opening>> {
        let mut matches: Vec<Opening> = self
            .openings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|opening| opening_text_matches(opening, query))
            .filter(|opening| owner.is_none() || opening.created_by == owner)
            .cloned()
            .collect();
        matches.sort_by(|a, b| compare_openings(a, b, sort));
        Ok(page_of(matches, page))
    }

    async fn search_users(
        &self,
        query: &str,
        sort: &SortOrder,
        page: PageRequest,
    ) -> Result<Vec<HrUser>> {
        let mut matches: Vec<HrUser> = self
            .users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|user| user_text_matches(user, query))
            .cloned()
            .collect();
        matches.sort_by(|a, b| compare_users(a, b, sort));
        Ok(page_of(matches, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Condition, Field};
    use crate::sort::SortBy;

    fn candidate(id: i64, first: &str, experience: &str) -> Candidate {
        let mut candidate = Candidate::new(id);
        candidate.first_name = Some(first.to_string());
        candidate.experience = Some(experience.to_string());
        candidate
    }

    #[tokio::test]
    async fn pages_and_totals() {
        let store = MemoryStore::new();
        for id in 1..=5 {
            store.insert_candidate(candidate(id, &format!("c{}", id), "2 years"));
        }

        let all = Predicate::All(Vec::new());
        let sort = SortBy::Name.resolve();
        let page = store
            .find_page(&all, &sort, PageRequest::new(2, 2))
            .await
            .unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].first_name.as_deref(), Some("c3"));
    }

    #[tokio::test]
    async fn experience_sort_is_lexical() {
        let store = MemoryStore::new();
        store.insert_candidate(candidate(1, "a", "10 years"));
        store.insert_candidate(candidate(2, "b", "2 years"));

        let all = Predicate::All(Vec::new());
        let sorted = store
            .find_all(&all, &SortBy::ExperienceHigh.resolve())
            .await
            .unwrap();
        // "2 years" sorts above "10 years" as text.
        assert_eq!(sorted[0].id, 2);
    }

    #[tokio::test]
    async fn find_by_id_round_trips() {
        let store = MemoryStore::new();
        store.insert_candidate(candidate(42, "asha", "1 year"));
        assert!(store.find_by_id(42).await.unwrap().is_some());
        assert!(store.find_by_id(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn directory_search_honors_owner() {
        let store = MemoryStore::new();
        let mut owned = candidate(1, "Asha", "2 years");
        owned.source_hr_id = Some(9);
        store.insert_candidate(owned);
        store.insert_candidate(candidate(2, "Asha", "2 years"));

        let sort = SortBy::Latest.resolve();
        let hits = store
            .search_candidates("asha", Some(9), &sort, PageRequest::new(1, 10))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[tokio::test]
    async fn predicate_conditions_apply() {
        let store = MemoryStore::new();
        let mut pune = candidate(1, "a", "2 years");
        pune.location = Some("Pune".into());
        store.insert_candidate(pune);
        store.insert_candidate(candidate(2, "b", "2 years"));

        let predicate = Predicate::Cond(Condition::Contains {
            field: Field::Location,
            needle: "pune".into(),
        });
        let matches = store
            .find_all(&predicate, &SortBy::Latest.resolve())
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 1);
    }
}
