//! Predicate building.
//!
//! Translates a [`FilterSet`] into:
//! - a [`Predicate`] tree the storage collaborator can evaluate over stored
//!   columns (AND of per-filter conditions, OR within list-valued filters)
//! - [`ResidualFilters`] for everything storage cannot evaluate, because the
//!   comparison needs a number parsed out of free text
//!
//! `Predicate::matches` defines the reference evaluation semantics; a SQL
//! backend must produce the same answers.

use startica_extract::normalize::contains_fold;
use startica_models::{Candidate, CandidateStatus};

use crate::filters::{FilterSet, HistoryPresence, SkillMatchMode};
use crate::residual::{Bounds, ResidualFilters};

/// Storage-evaluable candidate columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Location,
    Company,
    Profile,
    Skills,
    Degree,
    Gap,
    ExperienceLevel,
    NoticePeriod,
    EmploymentHistory,
}

/// One condition over a stored column.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Case-insensitive substring match. Absent fields never match.
    Contains { field: Field, needle: String },
    /// Literal equality. Absent fields never match.
    Eq { field: Field, value: String },
    /// Literal inequality. Absent fields never match (SQL NULL semantics).
    Ne { field: Field, value: String },
    /// Field is present (non-null). A present empty string counts.
    IsPresent { field: Field },
    StatusIn(Vec<CandidateStatus>),
    /// Inclusive range over the passing year.
    PassingYearBetween { min: i32, max: i32 },
    /// Equality on the owning HR identifier.
    OwnedBy(i64),
}

impl Condition {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        match self {
            Self::Contains { field, needle } => {
                field_text(candidate, *field).is_some_and(|text| contains_fold(text, needle))
            }
            Self::Eq { field, value } => {
                field_text(candidate, *field).is_some_and(|text| text == value)
            }
            Self::Ne { field, value } => {
                field_text(candidate, *field).is_some_and(|text| text != value)
            }
            Self::IsPresent { field } => field_text(candidate, *field).is_some(),
            Self::StatusIn(statuses) => statuses.contains(&candidate.status),
            Self::PassingYearBetween { min, max } => candidate
                .passing_year
                .is_some_and(|year| *min <= year && year <= *max),
            Self::OwnedBy(owner) => candidate.source_hr_id == Some(*owner),
        }
    }
}

fn field_text(candidate: &Candidate, field: Field) -> Option<&str> {
    let value = match field {
        Field::FirstName => &candidate.first_name,
        Field::LastName => &candidate.last_name,
        Field::Email => &candidate.email,
        Field::Phone => &candidate.phone,
        Field::Location => &candidate.location,
        Field::Company => &candidate.company,
        Field::Profile => &candidate.profile,
        Field::Skills => &candidate.skills,
        Field::Degree => &candidate.degree,
        Field::Gap => &candidate.gap,
        Field::ExperienceLevel => &candidate.experience_level,
        Field::NoticePeriod => &candidate.notice_period,
        Field::EmploymentHistory => &candidate.employment_history,
    };
    value.as_deref()
}

/// Conjunction/disjunction tree over [`Condition`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Every part must match. An empty conjunction matches everything.
    All(Vec<Predicate>),
    /// At least one part must match.
    Any(Vec<Predicate>),
    Cond(Condition),
}

impl Predicate {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        match self {
            Self::All(parts) => parts.iter().all(|part| part.matches(candidate)),
            Self::Any(parts) => parts.iter().any(|part| part.matches(candidate)),
            Self::Cond(condition) => condition.matches(candidate),
        }
    }
}

fn contains(field: Field, needle: &str) -> Predicate {
    Predicate::Cond(Condition::Contains {
        field,
        needle: needle.to_string(),
    })
}

fn any_contains(field: Field, needles: &[String]) -> Predicate {
    Predicate::Any(
        needles
            .iter()
            .map(|needle| contains(field, needle))
            .collect(),
    )
}

/// Fields the free-text query searches across.
const QUERY_FIELDS: [Field; 7] = [
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::Skills,
    Field::Profile,
    Field::Company,
];

/// Build the storage predicate and the residual filter set.
///
/// The owner restriction, when present, is the first conjunct; no other
/// filter can widen it.
pub fn build(query: &str, filters: &FilterSet, owner: Option<i64>) -> (Predicate, ResidualFilters) {
    let mut all = Vec::new();

    if let Some(owner) = owner {
        all.push(Predicate::Cond(Condition::OwnedBy(owner)));
    }

    let query = query.trim();
    if !query.is_empty() {
        all.push(Predicate::Any(
            QUERY_FIELDS
                .iter()
                .map(|field| contains(*field, query))
                .collect(),
        ));
    }

    if !filters.locations.is_empty() {
        all.push(any_contains(Field::Location, &filters.locations));
    }

    if !filters.primary_skills.is_empty() {
        let conditions: Vec<Predicate> = filters
            .primary_skills
            .iter()
            .map(|skill| contains(Field::Skills, skill))
            .collect();
        all.push(match filters.skill_match {
            SkillMatchMode::All => Predicate::All(conditions),
            SkillMatchMode::Any => Predicate::Any(conditions),
        });
    }

    if !filters.secondary_skills.is_empty() {
        all.push(any_contains(Field::Skills, &filters.secondary_skills));
    }

    if let Some(qualification) = &filters.qualification {
        all.push(contains(Field::Degree, qualification));
    }

    if let Some((min, max)) = filters.passing_year_range() {
        all.push(Predicate::Cond(Condition::PassingYearBetween { min, max }));
    }

    if let Some(company) = &filters.company {
        all.push(contains(Field::Company, company));
    }

    if let Some(profile) = &filters.profile {
        all.push(contains(Field::Profile, profile));
    }

    if !filters.application_status.is_empty() {
        all.push(Predicate::Cond(Condition::StatusIn(
            filters.application_status.clone(),
        )));
    }

    if !filters.experience_level.is_empty() {
        all.push(any_contains(Field::ExperienceLevel, &filters.experience_level));
    }

    if !filters.notice_period.is_empty() {
        all.push(any_contains(Field::NoticePeriod, &filters.notice_period));
    }

    if !filters.degree.is_empty() {
        // Degree filters are exact matches, unlike the qualification filter.
        all.push(Predicate::Any(
            filters
                .degree
                .iter()
                .map(|degree| {
                    Predicate::Cond(Condition::Eq {
                        field: Field::Degree,
                        value: degree.clone(),
                    })
                })
                .collect(),
        ));
    }

    if !filters.education_gap.is_empty() {
        all.push(any_contains(Field::Gap, &filters.education_gap));
    }

    if !filters.employment_history.is_empty() {
        all.push(employment_history_predicate(&filters.employment_history));
    }

    let residual = ResidualFilters {
        min_experience: filters.min_experience,
        current_ctc: Bounds {
            min: filters.min_current_ctc,
            max: filters.max_current_ctc,
        },
        expected_ctc: Bounds {
            min: filters.min_expected_ctc,
            max: filters.max_expected_ctc,
        },
    };

    (Predicate::All(all), residual)
}

/// "yes" matches the literal "yes" OR any present value that is neither
/// "yes" nor "no" (a JSON blob of past employers counts as having history).
/// Surprising, but stored data relies on it. "no" matches the literal "no".
fn employment_history_predicate(requested: &[HistoryPresence]) -> Predicate {
    let mut branches = Vec::new();

    if requested.contains(&HistoryPresence::Yes) {
        branches.push(Predicate::Any(vec![
            Predicate::Cond(Condition::Eq {
                field: Field::EmploymentHistory,
                value: "yes".to_string(),
            }),
            Predicate::All(vec![
                Predicate::Cond(Condition::IsPresent {
                    field: Field::EmploymentHistory,
                }),
                Predicate::Cond(Condition::Ne {
                    field: Field::EmploymentHistory,
                    value: "no".to_string(),
                }),
                Predicate::Cond(Condition::Ne {
                    field: Field::EmploymentHistory,
                    value: "yes".to_string(),
                }),
            ]),
        ]));
    }

    if requested.contains(&HistoryPresence::No) {
        branches.push(Predicate::Cond(Condition::Eq {
            field: Field::EmploymentHistory,
            value: "no".to_string(),
        }));
    }

    Predicate::Any(branches)
}
