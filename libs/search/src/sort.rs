//! Sort resolution.
//!
//! Callers pass a sort name; unknown or absent names fall back to newest
//! first. Resolution produces an ordered list of (key, direction) terms the
//! storage collaborator applies.

/// Sortable columns.
///
/// `Experience` and `CurrentPackage` order by the raw stored string, the way
/// a text column sorts; the parsed numeric forms only exist during residual
/// filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    UpdatedAt,
    CreatedAt,
    Experience,
    CurrentPackage,
    FirstName,
    LastName,
}

/// One sort term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortTerm {
    pub key: SortKey,
    pub ascending: bool,
}

/// Full sort specification, applied left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub terms: Vec<SortTerm>,
}

impl SortOrder {
    pub fn by(key: SortKey, ascending: bool) -> Self {
        Self {
            terms: vec![SortTerm { key, ascending }],
        }
    }

    pub fn then(mut self, key: SortKey, ascending: bool) -> Self {
        self.terms.push(SortTerm { key, ascending });
        self
    }
}

/// Requested sort order for candidate search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Latest,
    ExperienceHigh,
    ExperienceLow,
    SalaryHigh,
    Name,
}

impl SortBy {
    /// Unknown or empty names fall back to `Latest`.
    pub fn parse(value: &str) -> Self {
        match value {
            "latest" => Self::Latest,
            "experienceHigh" => Self::ExperienceHigh,
            "experienceLow" => Self::ExperienceLow,
            "salaryHigh" => Self::SalaryHigh,
            "name" => Self::Name,
            _ => Self::Latest,
        }
    }

    pub fn resolve(self) -> SortOrder {
        match self {
            Self::Latest => SortOrder::by(SortKey::UpdatedAt, false),
            Self::ExperienceHigh => SortOrder::by(SortKey::Experience, false),
            Self::ExperienceLow => SortOrder::by(SortKey::Experience, true),
            Self::SalaryHigh => SortOrder::by(SortKey::CurrentPackage, false),
            Self::Name => SortOrder::by(SortKey::FirstName, true).then(SortKey::LastName, true),
        }
    }
}
