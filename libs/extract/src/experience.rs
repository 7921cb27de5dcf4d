//! Experience duration parsing and classification.
//!
//! Experience is stored as free text entered by recruiters: "2.5 years",
//! "2 years 6 months", "30 months", sometimes just "3". `parse_experience`
//! folds every observed shape into decimal years and never fails; input with
//! no extractable number yields 0.0, which callers must treat as "no
//! extractable experience" rather than a literal zero.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A decimal figure like "2.5" anywhere in the text.
    static ref DECIMAL: Regex = Regex::new(r"\d+\.\d+").unwrap();
    /// Any numeric token, integer or decimal.
    static ref NUMBER: Regex = Regex::new(r"\d+(\.\d+)?").unwrap();
}

/// Parse an experience string into decimal years.
///
/// Rules in priority order:
/// 1. A decimal figure wins outright: strip everything that is not a digit
///    or dot and parse the remainder ("2.5 years" -> 2.5).
/// 2. Text mentioning both "year" and "month": the first two numeric tokens
///    are years and months ("2 years 6 months" -> 2.5).
/// 3. "year" only: first numeric token as years.
/// 4. "month" only: first numeric token divided by 12 ("30 months" -> 2.5).
/// 5. Otherwise the first numeric token is taken as years.
/// 6. No numeric token at all yields 0.0.
pub fn parse_experience(text: &str) -> f64 {
    let cleaned = text.trim().to_lowercase();
    if cleaned.is_empty() {
        return 0.0;
    }

    if DECIMAL.is_match(&cleaned) {
        let stripped: String = cleaned
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if let Ok(value) = stripped.parse::<f64>() {
            return value;
        }
        // More than one figure survived the strip ("1.2 or 3.4"); fall back
        // to the keyword rules below.
    }

    let has_year = cleaned.contains("year");
    let has_month = cleaned.contains("month");

    if has_year && has_month {
        let mut numbers = NUMBER
            .find_iter(&cleaned)
            .take(2)
            .filter_map(|m| m.as_str().parse::<f64>().ok());
        let years = numbers.next().unwrap_or(0.0);
        let months = numbers.next().unwrap_or(0.0);
        return years + months / 12.0;
    }

    if has_year {
        if let Some(years) = first_number(&cleaned) {
            return years;
        }
    }

    if has_month {
        if let Some(months) = first_number(&cleaned) {
            return months / 12.0;
        }
    }

    first_number(&cleaned).unwrap_or(0.0)
}

fn first_number(text: &str) -> Option<f64> {
    NUMBER.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Convert a years/months pair into decimal years.
pub fn years_months_to_decimal(years: u32, months: u32) -> f64 {
    f64::from(years) + f64::from(months) / 12.0
}

/// Convert decimal years back into a years/months pair (months capped at 11).
pub fn decimal_to_years_months(decimal: f64) -> (u32, u32) {
    let years = decimal.floor() as u32;
    let months = ((decimal - f64::from(years)) * 12.0).round() as u32;
    (years, months.min(11))
}

/// Format a years/months pair for display: "2 years 6 months", "1 year",
/// "3 months", or "0 years" when both are zero.
pub fn format_experience(years: u32, months: u32) -> String {
    let year_part = |n: u32| format!("{} year{}", n, if n == 1 { "" } else { "s" });
    let month_part = |n: u32| format!("{} month{}", n, if n == 1 { "" } else { "s" });

    match (years, months) {
        (0, 0) => "0 years".to_string(),
        (y, 0) => year_part(y),
        (0, m) => month_part(m),
        (y, m) => format!("{} {}", year_part(y), month_part(m)),
    }
}

/// Seniority bands derived from decimal years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceCategory {
    Fresher,
    EntryLevel,
    Junior,
    MidLevel,
    Senior,
    Lead,
    Expert,
}

impl ExperienceCategory {
    pub fn from_years(years: f64) -> Self {
        if years < 1.0 {
            Self::Fresher
        } else if years < 2.0 {
            Self::EntryLevel
        } else if years < 4.0 {
            Self::Junior
        } else if years < 6.0 {
            Self::MidLevel
        } else if years < 10.0 {
            Self::Senior
        } else if years < 15.0 {
            Self::Lead
        } else {
            Self::Expert
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fresher => "Fresher",
            Self::EntryLevel => "Entry Level",
            Self::Junior => "Junior",
            Self::MidLevel => "Mid-Level",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
            Self::Expert => "Expert",
        }
    }
}

/// Closeness score in [0, 1] between two experience figures, weighted down
/// as the gap grows (within 6 months keeps the raw score, beyond 3 years it
/// is heavily discounted).
pub fn experience_similarity(a: f64, b: f64) -> f64 {
    let difference = (a - b).abs();
    let max_experience = a.max(b).max(1.0);
    let similarity = (1.0 - difference / max_experience).max(0.0);

    if difference <= 0.5 {
        similarity
    } else if difference <= 1.0 {
        similarity * 0.9
    } else if difference <= 2.0 {
        similarity * 0.7
    } else if difference <= 3.0 {
        similarity * 0.5
    } else {
        similarity * 0.3
    }
}
