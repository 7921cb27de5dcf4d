//! Text normalization and numeric extraction for recruitment data.
//!
//! Candidate records carry human-entered free text ("2 years 6 months",
//! "₹12,00,000 per annum") that filters need as numbers. This crate turns
//! those strings into canonical values:
//! - Case-insensitive text comparison helpers
//! - Experience duration parsing into decimal years
//! - Currency figure parsing

pub mod currency;
pub mod experience;
pub mod normalize;

pub use currency::parse_currency;
pub use experience::{parse_experience, ExperienceCategory};
pub use normalize::{contains_fold, find_fold, fold};
