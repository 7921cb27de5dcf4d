//! Result projection.
//!
//! Maps internal candidate records into the external result shape and
//! highlights the first free-text hit inside a composed display line.

use chrono::{DateTime, Utc};
use serde::Serialize;
use startica_extract::normalize::find_fold;
use startica_models::{Candidate, CandidateStatus};

/// Externally visible candidate fields plus the highlighted display line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateHit {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub profile: Option<String>,
    pub company: Option<String>,
    pub experience: Option<String>,
    pub experience_level: Option<String>,
    pub current_package: Option<String>,
    pub expected_ctc: Option<String>,
    pub location: Option<String>,
    pub notice_period: Option<String>,
    pub primary_skills: Option<String>,
    pub education: Option<String>,
    pub degree: Option<String>,
    pub passing_year: Option<i32>,
    pub gap: Option<String>,
    pub status: CandidateStatus,
    pub updated_at: DateTime<Utc>,
    pub highlighted_text: String,
}

/// Project a record, highlighting `query` inside "first last - skills".
pub fn to_hit(candidate: &Candidate, query: &str) -> CandidateHit {
    let display = display_line(candidate);
    CandidateHit {
        id: candidate.id,
        first_name: candidate.first_name.clone(),
        last_name: candidate.last_name.clone(),
        email: candidate.email.clone(),
        phone: candidate.phone.clone(),
        profile: candidate.profile.clone(),
        company: candidate.company.clone(),
        experience: candidate.experience.clone(),
        experience_level: candidate.experience_level.clone(),
        current_package: candidate.current_package.clone(),
        expected_ctc: candidate.expected_ctc.clone(),
        location: candidate.location.clone(),
        notice_period: candidate.notice_period.clone(),
        primary_skills: candidate.skills.clone(),
        education: candidate.education.clone(),
        degree: candidate.degree.clone(),
        passing_year: candidate.passing_year,
        gap: candidate.gap.clone(),
        status: candidate.status,
        updated_at: candidate.updated_at,
        highlighted_text: highlight_match(&display, query.trim()),
    }
}

pub(crate) fn display_line(candidate: &Candidate) -> String {
    format!(
        "{} - {}",
        candidate.display_name(),
        candidate.skills.as_deref().unwrap_or_default()
    )
}

/// Wrap the first case-insensitive occurrence of `query` in a highlight
/// marker. Later occurrences are left alone; no occurrence or an empty
/// query returns the text unchanged.
pub fn highlight_match(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }
    match find_fold(text, query) {
        Some((start, end)) => format!(
            "{}<mark>{}</mark>{}",
            &text[..start],
            &text[start..end],
            &text[end..]
        ),
        None => text.to_string(),
    }
}
