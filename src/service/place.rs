use super::{require_non_empty, require_positive_id};
use crate::error::AppError;
use crate::model::{NewPlace, Place};
use crate::repository::{CountryRepository, PlaceRepository};
use std::sync::Arc;

/// Place operations. Every read path attaches the place's country; a place whose
/// country cannot be loaded fails the whole call.
#[derive(Clone)]
pub struct PlaceService {
    places: Arc<dyn PlaceRepository>,
    countries: Arc<dyn CountryRepository>,
}

impl PlaceService {
    pub fn new(places: Arc<dyn PlaceRepository>, countries: Arc<dyn CountryRepository>) -> Self {
        PlaceService { places, countries }
    }

    pub async fn create(&self, input: NewPlace) -> Result<Place, AppError> {
        require_non_empty("name", &input.name)?;
        self.places.create(input).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Place, AppError> {
        require_positive_id(id)?;
        let mut place = self.places.get_by_id(id).await?;
        self.attach_country(&mut place).await?;
        Ok(place)
    }

    pub async fn get_all(&self) -> Result<Vec<Place>, AppError> {
        let places = self.places.get_all().await?;
        self.enrich(places).await
    }

    pub async fn update(&self, id: i64, input: NewPlace) -> Result<Place, AppError> {
        require_positive_id(id)?;
        require_non_empty("name", &input.name)?;
        self.places.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        require_positive_id(id)?;
        self.places.delete(id).await
    }

    /// Unknown countries yield an empty list.
    pub async fn places_by_country(&self, country_id: i64) -> Result<Vec<Place>, AppError> {
        let places = self.places.get_by_country_id(country_id).await?;
        self.enrich(places).await
    }

    pub async fn search(&self, query: &str, limit: i64) -> Result<Vec<Place>, AppError> {
        let places = self.places.search_by_name(query, limit).await?;
        self.enrich(places).await
    }

    async fn enrich(&self, mut places: Vec<Place>) -> Result<Vec<Place>, AppError> {
        for place in &mut places {
            self.attach_country(place).await?;
        }
        Ok(places)
    }

    async fn attach_country(&self, place: &mut Place) -> Result<(), AppError> {
        let country = self
            .countries
            .get_by_id(place.country_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::Integrity(format!(
                    "place {} references missing country {}",
                    place.id, place.country_id
                )),
                other => other,
            })?;
        place.country = Some(country);
        Ok(())
    }
}
