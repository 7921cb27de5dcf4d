//! Candidate record and application status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application status of a candidate. Never absent once a record exists;
/// new records default to `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CandidateStatus {
    #[default]
    Pending,
    Interested,
    NotInterested,
    TellLater,
    Contacted,
    Offered,
    Hired,
}

impl CandidateStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(Self::Pending),
            "INTERESTED" => Some(Self::Interested),
            "NOT_INTERESTED" => Some(Self::NotInterested),
            "TELL_LATER" => Some(Self::TellLater),
            "CONTACTED" => Some(Self::Contacted),
            "OFFERED" => Some(Self::Offered),
            "HIRED" => Some(Self::Hired),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Interested => "INTERESTED",
            Self::NotInterested => "NOT_INTERESTED",
            Self::TellLater => "TELL_LATER",
            Self::Contacted => "CONTACTED",
            Self::Offered => "OFFERED",
            Self::Hired => "HIRED",
        }
    }
}

/// A candidate as read from storage.
///
/// Most text fields are recruiter-entered and optional. `experience`,
/// `current_package` and `expected_ctc` are deliberately kept as free text;
/// the search engine derives numbers from them on demand rather than at
/// write time. `employment_history` holds either the literal "yes"/"no" or
/// a JSON blob describing past employers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub profile: Option<String>,
    pub degree: Option<String>,
    pub passing_year: Option<i32>,
    /// Derived from the `education` JSON blob when present and parseable.
    pub percentage: Option<f32>,
    pub experience: Option<String>,
    pub current_package: Option<String>,
    pub expected_ctc: Option<String>,
    pub gap: Option<String>,
    pub skills: Option<String>,
    pub resume_url: Option<String>,
    pub status: CandidateStatus,
    /// Owning HR user; `None` for candidates without an assigned source.
    pub source_hr_id: Option<i64>,
    pub notes: Option<String>,
    pub employment_history: Option<String>,
    pub education: Option<String>,
    pub experience_level: Option<String>,
    pub notice_period: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    /// A fresh record: status defaults to `Pending`, both timestamps equal.
    pub fn new(id: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
            ..Self::default()
        }
    }

    /// Record a mutation: advance `updated_at` (monotonically, even against
    /// a clock that stepped backwards) and re-derive the percentage.
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
        self.refresh_percentage_from_education();
    }

    /// Copy a numeric `percentage` out of the `education` JSON blob.
    ///
    /// Blank education and invalid JSON leave any prior value unchanged, as
    /// does a JSON object without a numeric `percentage` member.
    pub fn refresh_percentage_from_education(&mut self) {
        let Some(education) = self.education.as_deref() else {
            return;
        };
        if education.trim().is_empty() {
            return;
        }
        let Ok(value) = serde_json::from_str::<serde_json::Value>(education) else {
            return;
        };
        if let Some(percentage) = value.get("percentage").and_then(|p| p.as_f64()) {
            self.percentage = Some(percentage as f32);
        }
    }

    /// "first last", joining whichever name parts are present.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_round_trips() {
        for status in [
            CandidateStatus::Pending,
            CandidateStatus::Interested,
            CandidateStatus::NotInterested,
            CandidateStatus::TellLater,
            CandidateStatus::Contacted,
            CandidateStatus::Offered,
            CandidateStatus::Hired,
        ] {
            assert_eq!(CandidateStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CandidateStatus::parse("REJECTED"), None);
    }

    #[test]
    fn new_records_are_pending() {
        let candidate = Candidate::new(1);
        assert_eq!(candidate.status, CandidateStatus::Pending);
        assert_eq!(candidate.created_at, candidate.updated_at);
    }

    #[test]
    fn touch_never_decreases_updated_at() {
        let mut candidate = Candidate::new(1);
        let before = candidate.updated_at;
        candidate.touch();
        assert!(candidate.updated_at >= before);

        // A record stamped in the future keeps its timestamp.
        candidate.updated_at = Utc::now() + chrono::Duration::hours(1);
        let future = candidate.updated_at;
        candidate.touch();
        assert_eq!(candidate.updated_at, future);
    }

    #[test]
    fn percentage_derived_from_education_json() {
        let mut candidate = Candidate::new(1);
        candidate.education = Some(r#"{"degree":"B.Tech","percentage":78.5}"#.to_string());
        candidate.refresh_percentage_from_education();
        assert_eq!(candidate.percentage, Some(78.5));
    }

    #[test]
    fn invalid_education_json_keeps_prior_percentage() {
        let mut candidate = Candidate::new(1);
        candidate.percentage = Some(60.0);

        candidate.education = Some("not json".to_string());
        candidate.refresh_percentage_from_education();
        assert_eq!(candidate.percentage, Some(60.0));

        candidate.education = Some("   ".to_string());
        candidate.refresh_percentage_from_education();
        assert_eq!(candidate.percentage, Some(60.0));

        candidate.education = Some(r#"{"percentage":null}"#.to_string());
        candidate.refresh_percentage_from_education();
        assert_eq!(candidate.percentage, Some(60.0));
    }

    #[test]
    fn display_name_joins_present_parts() {
        let mut candidate = Candidate::new(1);
        assert_eq!(candidate.display_name(), "");
        candidate.first_name = Some("Asha".into());
        assert_eq!(candidate.display_name(), "Asha");
        candidate.last_name = Some("Rao".into());
        assert_eq!(candidate.display_name(), "Asha Rao");
    }
}
