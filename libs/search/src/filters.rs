//! Filter set parsing and validation.
//!
//! Filters arrive from the transport layer as a JSON object. Every
//! recognized filter name maps to a [`Filter`] variant with a typed payload;
//! unrecognized names and wrong-shaped payloads are rejected at parse time
//! instead of being silently ignored, so a typo in a filter name fails the
//! request visibly.

use serde_json::Value;
use startica_models::CandidateStatus;

use crate::{Error, Result};

/// How a list of primary skills combines: every skill must match, or any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillMatchMode {
    All,
    #[default]
    Any,
}

impl SkillMatchMode {
    /// Only the literal "ALL" selects [`SkillMatchMode::All`]; anything else
    /// is the default.
    pub fn parse(value: &str) -> Self {
        if value == "ALL" {
            Self::All
        } else {
            Self::Any
        }
    }
}

/// Employment-history presence request: records with history, or without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryPresence {
    Yes,
    No,
}

impl HistoryPresence {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }
}

/// One recognized filter with its typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Locations(Vec<String>),
    PrimarySkills(Vec<String>),
    SkillMatchType(SkillMatchMode),
    SecondarySkills(Vec<String>),
    Qualification(String),
    MinPassingYear(i32),
    MaxPassingYear(i32),
    Company(String),
    Profile(String),
    ApplicationStatus(Vec<CandidateStatus>),
    ExperienceLevel(Vec<String>),
    NoticePeriod(Vec<String>),
    Degree(Vec<String>),
    EducationGap(Vec<String>),
    EmploymentHistory(Vec<HistoryPresence>),
    MinExperience(f64),
    MinCurrentCtc(f64),
    MaxCurrentCtc(f64),
    MinExpectedCtc(f64),
    MaxExpectedCtc(f64),
}

impl Filter {
    /// Parse one (name, value) entry of the incoming filter object.
    pub fn parse(name: &str, value: &Value) -> Result<Self> {
        match name {
            "locations" => Ok(Self::Locations(string_list(name, value)?)),
            "primarySkills" => Ok(Self::PrimarySkills(string_list(name, value)?)),
            "skillMatchType" => Ok(Self::SkillMatchType(SkillMatchMode::parse(&string(
                name, value,
            )?))),
            "secondarySkills" => Ok(Self::SecondarySkills(string_list(name, value)?)),
            "qualification" => Ok(Self::Qualification(string(name, value)?)),
            "minPassingYear" => Ok(Self::MinPassingYear(integer(name, value)?)),
            "maxPassingYear" => Ok(Self::MaxPassingYear(integer(name, value)?)),
            "company" => Ok(Self::Company(string(name, value)?)),
            "profile" => Ok(Self::Profile(string(name, value)?)),
            "applicationStatus" => {
                let mut statuses = Vec::new();
                for token in string_list(name, value)? {
                    let status = CandidateStatus::parse(&token).ok_or_else(|| {
                        Error::InvalidFilterValue {
                            name: name.to_string(),
                            reason: format!("unknown status '{}'", token),
                        }
                    })?;
                    statuses.push(status);
                }
                Ok(Self::ApplicationStatus(statuses))
            }
            "experienceLevel" => Ok(Self::ExperienceLevel(string_list(name, value)?)),
            "noticePeriod" => Ok(Self::NoticePeriod(string_list(name, value)?)),
            "degree" => Ok(Self::Degree(string_list(name, value)?)),
            "educationGap" => Ok(Self::EducationGap(string_list(name, value)?)),
            "employmentHistory" => {
                let mut presences = Vec::new();
                for token in string_list(name, value)? {
                    let presence = HistoryPresence::parse(&token).ok_or_else(|| {
                        Error::InvalidFilterValue {
                            name: name.to_string(),
                            reason: format!("expected \"yes\" or \"no\", got '{}'", token),
                        }
                    })?;
                    presences.push(presence);
                }
                Ok(Self::EmploymentHistory(presences))
            }
            "minExperience" => Ok(Self::MinExperience(number(name, value)?)),
            "minCurrentCTC" => Ok(Self::MinCurrentCtc(number(name, value)?)),
            "maxCurrentCTC" => Ok(Self::MaxCurrentCtc(number(name, value)?)),
            "minExpectedCTC" => Ok(Self::MinExpectedCtc(number(name, value)?)),
            "maxExpectedCTC" => Ok(Self::MaxExpectedCtc(number(name, value)?)),
            other => Err(Error::UnknownFilter(other.to_string())),
        }
    }
}

fn string(name: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidFilterValue {
            name: name.to_string(),
            reason: "expected a string".to_string(),
        })
}

fn string_list(name: &str, value: &Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| Error::InvalidFilterValue {
        name: name.to_string(),
        reason: "expected a list of strings".to_string(),
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| Error::InvalidFilterValue {
                    name: name.to_string(),
                    reason: "expected a list of strings".to_string(),
                })
        })
        .collect()
}

fn integer(name: &str, value: &Value) -> Result<i32> {
    value
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| Error::InvalidFilterValue {
            name: name.to_string(),
            reason: "expected an integer".to_string(),
        })
}

fn number(name: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| Error::InvalidFilterValue {
        name: name.to_string(),
        reason: "expected a number".to_string(),
    })
}

/// Aggregated, typed view of a request's filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub locations: Vec<String>,
    pub primary_skills: Vec<String>,
    pub skill_match: SkillMatchMode,
    pub secondary_skills: Vec<String>,
    pub qualification: Option<String>,
    pub min_passing_year: Option<i32>,
    pub max_passing_year: Option<i32>,
    pub company: Option<String>,
    pub profile: Option<String>,
    pub application_status: Vec<CandidateStatus>,
    pub experience_level: Vec<String>,
    pub notice_period: Vec<String>,
    pub degree: Vec<String>,
    pub education_gap: Vec<String>,
    pub employment_history: Vec<HistoryPresence>,
    pub min_experience: Option<f64>,
    pub min_current_ctc: Option<f64>,
    pub max_current_ctc: Option<f64>,
    pub min_expected_ctc: Option<f64>,
    pub max_expected_ctc: Option<f64>,
}

impl FilterSet {
    /// Parse a whole filter object. Fails on the first unrecognized name or
    /// malformed value.
    pub fn from_map(map: &serde_json::Map<String, Value>) -> Result<Self> {
        let mut set = Self::default();
        for (name, value) in map {
            set.apply(Filter::parse(name, value)?);
        }
        Ok(set)
    }

    /// Fold one parsed filter into the set. Blank single-valued text filters
    /// are treated as absent.
    pub fn apply(&mut self, filter: Filter) {
        match filter {
            Filter::Locations(values) => self.locations = values,
            Filter::PrimarySkills(values) => self.primary_skills = values,
            Filter::SkillMatchType(mode) => self.skill_match = mode,
            Filter::SecondarySkills(values) => self.secondary_skills = values,
            Filter::Qualification(value) => self.qualification = non_blank(value),
            Filter::MinPassingYear(year) => self.min_passing_year = Some(year),
            Filter::MaxPassingYear(year) => self.max_passing_year = Some(year),
            Filter::Company(value) => self.company = non_blank(value),
            Filter::Profile(value) => self.profile = non_blank(value),
            Filter::ApplicationStatus(statuses) => self.application_status = statuses,
            Filter::ExperienceLevel(values) => self.experience_level = values,
            Filter::NoticePeriod(values) => self.notice_period = values,
            Filter::Degree(values) => self.degree = values,
            Filter::EducationGap(values) => self.education_gap = values,
            Filter::EmploymentHistory(values) => self.employment_history = values,
            Filter::MinExperience(value) => self.min_experience = Some(value),
            Filter::MinCurrentCtc(value) => self.min_current_ctc = Some(value),
            Filter::MaxCurrentCtc(value) => self.max_current_ctc = Some(value),
            Filter::MinExpectedCtc(value) => self.min_expected_ctc = Some(value),
            Filter::MaxExpectedCtc(value) => self.max_expected_ctc = Some(value),
        }
    }

    /// The passing-year range is only usable when both bounds were given; a
    /// single bound never forms a half-open range.
    pub fn passing_year_range(&self) -> Option<(i32, i32)> {
        match (self.min_passing_year, self.max_passing_year) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn parses_typed_payloads() {
        let set = FilterSet::from_map(&map(json!({
            "locations": ["Pune", "Remote"],
            "primarySkills": ["java", "sql"],
            "skillMatchType": "ALL",
            "minPassingYear": 2018,
            "maxPassingYear": 2022,
            "applicationStatus": ["PENDING", "HIRED"],
            "employmentHistory": ["yes"],
            "minExperience": 2.5,
        })))
        .unwrap();

        assert_eq!(set.locations, vec!["Pune", "Remote"]);
        assert_eq!(set.skill_match, SkillMatchMode::All);
        assert_eq!(set.passing_year_range(), Some((2018, 2022)));
        assert_eq!(
            set.application_status,
            vec![CandidateStatus::Pending, CandidateStatus::Hired]
        );
        assert_eq!(set.employment_history, vec![HistoryPresence::Yes]);
        assert_eq!(set.min_experience, Some(2.5));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = FilterSet::from_map(&map(json!({"locatoins": ["Pune"]}))).unwrap_err();
        assert!(matches!(err, Error::UnknownFilter(name) if name == "locatoins"));
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(FilterSet::from_map(&map(json!({"minExperience": "2"}))).is_err());
        assert!(FilterSet::from_map(&map(json!({"locations": "Pune"}))).is_err());
        assert!(FilterSet::from_map(&map(json!({"applicationStatus": ["REJECTED"]}))).is_err());
        assert!(FilterSet::from_map(&map(json!({"employmentHistory": ["maybe"]}))).is_err());
    }

    #[test]
    fn single_passing_year_bound_is_dropped() {
        let set = FilterSet::from_map(&map(json!({"minPassingYear": 2018}))).unwrap();
        assert_eq!(set.passing_year_range(), None);
    }

    #[test]
    fn skill_match_type_is_literal() {
        assert_eq!(SkillMatchMode::parse("ALL"), SkillMatchMode::All);
        assert_eq!(SkillMatchMode::parse("all"), SkillMatchMode::Any);
        assert_eq!(SkillMatchMode::parse("ANY"), SkillMatchMode::Any);
    }

    #[test]
    fn blank_text_filters_are_absent() {
        let set = FilterSet::from_map(&map(json!({"company": "  "}))).unwrap();
        assert_eq!(set.company, None);
    }
}
