//! HTTP handlers for countries and places.

pub mod country;
pub mod place;

use serde::Deserialize;
use utoipa::IntoParams;

/// Result count used when `limit` is absent, unparsable or not positive.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// `?q=&limit=` for the search routes. `limit` stays text so bad values fall back to the default.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring of the name.
    pub q: Option<String>,
    /// Maximum number of results (default 10).
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
    }
}
