//! Persistence for countries and places: traits plus PostgreSQL and in-memory backends.

mod country;
mod memory;
mod place;

pub use country::PgCountryRepository;
pub use memory::{InMemoryCountryRepository, InMemoryPlaceRepository};
pub use place::PgPlaceRepository;

use crate::error::AppError;
use crate::model::{Country, NewCountry, NewPlace, Place};
use async_trait::async_trait;

#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Country>, AppError>;

    /// `AppError::NotFound` when no row has this id.
    async fn get_by_id(&self, id: i64) -> Result<Country, AppError>;

    /// Returns the generated id.
    async fn add(&self, input: NewCountry) -> Result<i64, AppError>;

    /// Replaces name, capital, language, currency and description. `photo_url` is left as stored.
    async fn update(&self, id: i64, input: NewCountry) -> Result<Country, AppError>;

    /// Returns the deleted id.
    async fn delete(&self, id: i64) -> Result<i64, AppError>;

    async fn search_by_name(&self, query: &str, limit: i64) -> Result<Vec<Country>, AppError>;
}

#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Inserts the place and its photo rows in one transaction.
    async fn create(&self, input: NewPlace) -> Result<Place, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Place, AppError>;

    async fn get_all(&self) -> Result<Vec<Place>, AppError>;

    /// Replaces name, description, longitude and latitude. Photos and country are untouched.
    async fn update(&self, id: i64, input: NewPlace) -> Result<Place, AppError>;

    /// Deletes photos then the place, all or nothing.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn get_by_country_id(&self, country_id: i64) -> Result<Vec<Place>, AppError>;

    async fn search_by_name(&self, query: &str, limit: i64) -> Result<Vec<Place>, AppError>;
}

/// Trimmed search term, or `None` when the query is blank.
pub(crate) fn search_term(query: &str) -> Option<&str> {
    let q = query.trim();
    (!q.is_empty()).then_some(q)
}

/// `ILIKE` pattern matching `term` as a literal substring.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
