//! Residual filters: the in-memory pass.
//!
//! Experience and CTC thresholds compare against numbers parsed out of free
//! text, which storage cannot do. The classification is static: these three
//! filters are always residual, everything else is always storage-evaluable.
//!
//! The two parsers fail differently on bad data, and both behaviors are
//! load-bearing: a record with no extractable experience never satisfies a
//! minimum-experience filter, while a record with an unparseable currency
//! field survives any CTC bound.

use startica_extract::{parse_currency, parse_experience};
use startica_models::Candidate;

/// Optional lower/upper bound pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Filters evaluated per record after the storage fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidualFilters {
    pub min_experience: Option<f64>,
    pub current_ctc: Bounds,
    pub expected_ctc: Bounds,
}

impl ResidualFilters {
    /// With no residual filters the engine can page in storage directly.
    pub fn is_empty(&self) -> bool {
        self.min_experience.is_none() && self.current_ctc.is_empty() && self.expected_ctc.is_empty()
    }

    /// Whether the record survives every residual filter.
    pub fn retains(&self, candidate: &Candidate) -> bool {
        if let Some(min) = self.min_experience {
            match candidate.experience.as_deref() {
                None => return false,
                Some(text) if text.trim().is_empty() => return false,
                Some(text) => {
                    if parse_experience(text) < min {
                        return false;
                    }
                }
            }
        }

        if !within(self.current_ctc, candidate.current_package.as_deref()) {
            return false;
        }
        if !within(self.expected_ctc, candidate.expected_ctc.as_deref()) {
            return false;
        }

        true
    }
}

/// Bounds check over a free-text currency field. Missing, blank or
/// unparseable values keep the record.
fn within(bounds: Bounds, text: Option<&str>) -> bool {
    if bounds.is_empty() {
        return true;
    }
    let Some(text) = text else {
        return true;
    };
    if text.trim().is_empty() {
        return true;
    }
    let Some(amount) = parse_currency(text) else {
        return true;
    };
    if bounds.min.is_some_and(|min| amount < min) {
        return false;
    }
    if bounds.max.is_some_and(|max| amount > max) {
        return false;
    }
    true
}
