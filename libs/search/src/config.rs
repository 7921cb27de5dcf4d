//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Pagination limits for search requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Page size used when a request does not specify one.
    pub default_page_size: u32,
    /// Upper bound on requested page sizes; larger requests are clamped.
    pub max_page_size: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 200,
        }
    }
}

impl SearchConfig {
    /// Defaults, overridable via `STARTICA_SEARCH_DEFAULT_PAGE_SIZE` and
    /// `STARTICA_SEARCH_MAX_PAGE_SIZE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(value) = env_u32("STARTICA_SEARCH_DEFAULT_PAGE_SIZE") {
            config.default_page_size = value;
        }
        if let Some(value) = env_u32("STARTICA_SEARCH_MAX_PAGE_SIZE") {
            config.max_page_size = value;
        }
        config
    }
}

fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key).ok().and_then(|value| value.parse().ok())
}
