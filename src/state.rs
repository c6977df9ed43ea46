//! Shared application state for all routes.

use crate::repository::{CountryRepository, PgCountryRepository, PgPlaceRepository, PlaceRepository};
use crate::service::{CountryService, PlaceService};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub countries: CountryService,
    pub places: PlaceService,
}

impl AppState {
    pub fn new(countries: Arc<dyn CountryRepository>, places: Arc<dyn PlaceRepository>) -> Self {
        AppState {
            countries: CountryService::new(countries.clone()),
            places: PlaceService::new(places, countries),
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgCountryRepository::new(pool.clone())),
            Arc::new(PgPlaceRepository::new(pool)),
        )
    }
}
