//! Shared fixtures for the search integration tests.

use async_trait::async_trait;
use chrono::Duration;
use startica_models::{Candidate, CandidateStatus, HrUser, Opening};
use startica_search::predicate::Predicate;
use startica_search::sort::SortOrder;
use startica_search::store::{CandidatePage, CandidateStore, PageRequest};
use startica_search::{Error, Result};

/// Builder for candidate records.
pub struct CandidateBuilder {
    candidate: Candidate,
}

impl CandidateBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            candidate: Candidate::new(id),
        }
    }

    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.candidate.first_name = Some(first.into());
        self.candidate.last_name = Some(last.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.candidate.email = Some(email.into());
        self
    }

    pub fn skills(mut self, skills: impl Into<String>) -> Self {
        self.candidate.skills = Some(skills.into());
        self
    }

    pub fn experience(mut self, experience: impl Into<String>) -> Self {
        self.candidate.experience = Some(experience.into());
        self
    }

    pub fn current_package(mut self, package: impl Into<String>) -> Self {
        self.candidate.current_package = Some(package.into());
        self
    }

    pub fn expected_ctc(mut self, expected: impl Into<String>) -> Self {
        self.candidate.expected_ctc = Some(expected.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.candidate.location = Some(location.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.candidate.company = Some(company.into());
        self
    }

    pub fn degree(mut self, degree: impl Into<String>) -> Self {
        self.candidate.degree = Some(degree.into());
        self
    }

    pub fn passing_year(mut self, year: i32) -> Self {
        self.candidate.passing_year = Some(year);
        self
    }

    pub fn status(mut self, status: CandidateStatus) -> Self {
        self.candidate.status = status;
        self
    }

    pub fn owned_by(mut self, hr_id: i64) -> Self {
        self.candidate.source_hr_id = Some(hr_id);
        self
    }

    pub fn employment_history(mut self, history: impl Into<String>) -> Self {
        self.candidate.employment_history = Some(history.into());
        self
    }

    /// Push `updated_at` forward so "latest" ordering is deterministic.
    pub fn updated_later_by(mut self, seconds: i64) -> Self {
        self.candidate.updated_at += Duration::seconds(seconds);
        self
    }

    pub fn build(self) -> Candidate {
        self.candidate
    }
}

pub fn opening(id: i64, title: &str, department: &str, created_by: Option<i64>) -> Opening {
    Opening {
        id,
        title: Some(title.to_string()),
        department: Some(department.to_string()),
        created_by,
        ..Opening::default()
    }
}

pub fn hr_user(id: i64, full_name: &str, email: &str, role: &str) -> HrUser {
    HrUser {
        id,
        full_name: Some(full_name.to_string()),
        email: Some(email.to_string()),
        role: Some(role.to_string()),
        ..HrUser::default()
    }
}

/// A store whose every call fails, for exercising the degraded path.
pub struct FailingStore;

#[async_trait]
impl CandidateStore for FailingStore {
    async fn find_page(
        &self,
        _predicate: &Predicate,
        _sort: &SortOrder,
        _page: PageRequest,
    ) -> Result<CandidatePage> {
        Err(Error::Store("connection reset".to_string()))
    }

    async fn find_all(&self, _predicate: &Predicate, _sort: &SortOrder) -> Result<Vec<Candidate>> {
        Err(Error::Store("connection reset".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Candidate>> {
        Err(Error::Store("connection reset".to_string()))
    }
}
