//! Opening and HR user records, as surfaced by global search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job opening.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: i64,
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub max_salary: Option<f64>,
    pub status: Option<String>,
    /// HR user that created the opening.
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An HR user account, as exposed to search (no credentials).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HrUser {
    pub id: i64,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}
