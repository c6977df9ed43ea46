//! In-memory repositories for tests and local development without PostgreSQL.
//!
//! `country_id` is not checked against the country table: the foreign key on
//! `places.country_id` exists only in PostgreSQL, so a place may name a missing country here.

use super::{search_term, CountryRepository, PlaceRepository};
use crate::error::AppError;
use crate::model::{Country, NewCountry, NewPlace, Place, PlacePhoto, PlaceRow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct CountryTable {
    rows: BTreeMap<i64, Country>,
    last_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryCountryRepository {
    table: Arc<RwLock<CountryTable>>,
}

impl InMemoryCountryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Case-folded name order, close to a linguistic collation on `ORDER BY name`.
fn by_name(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn limit_to_len(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn list(&self) -> Result<Vec<Country>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Country, AppError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("country with ID {} not found", id)))
    }

    async fn add(&self, input: NewCountry) -> Result<i64, AppError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, input.into_country(id));
        Ok(id)
    }

    async fn update(&self, id: i64, input: NewCountry) -> Result<Country, AppError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("country not found".into()))?;
        row.name = input.name;
        row.capital = input.capital;
        row.language = input.language;
        row.currency = input.currency;
        row.description = input.description;
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<i64, AppError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|c| c.id)
            .ok_or_else(|| AppError::NotFound(format!("country with ID {} not found", id)))
    }

    async fn search_by_name(&self, query: &str, limit: i64) -> Result<Vec<Country>, AppError> {
        let Some(term) = search_term(query) else {
            return Ok(Vec::new());
        };
        let table = self.table.read().await;
        let mut found: Vec<Country> = table
            .rows
            .values()
            .filter(|c| name_matches(&c.name, term))
            .cloned()
            .collect();
        found.sort_by(|a, b| by_name(&a.name, &b.name));
        found.truncate(limit_to_len(limit));
        Ok(found)
    }
}

#[derive(Default)]
struct PlaceTable {
    rows: BTreeMap<i64, PlaceRow>,
    photos: Vec<PlacePhoto>,
    last_place_id: i64,
    last_photo_id: i64,
}

impl PlaceTable {
    fn place(&self, row: &PlaceRow) -> Place {
        let photos = self
            .photos
            .iter()
            .filter(|p| p.place_id == row.id)
            .map(|p| p.url.clone())
            .collect();
        Place::from_row(row.clone(), photos)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryPlaceRepository {
    table: Arc<RwLock<PlaceTable>>,
}

impl InMemoryPlaceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored photo rows, across all places.
    pub async fn photo_count(&self) -> usize {
        self.table.read().await.photos.len()
    }
}

#[async_trait]
impl PlaceRepository for InMemoryPlaceRepository {
    async fn create(&self, input: NewPlace) -> Result<Place, AppError> {
        let mut table = self.table.write().await;
        table.last_place_id += 1;
        let row = PlaceRow {
            id: table.last_place_id,
            name: input.name.clone(),
            description: input.description.clone(),
            longitude: input.longitude,
            latitude: input.latitude,
            country_id: input.country_ref(),
        };
        for url in input.photo_urls {
            table.last_photo_id += 1;
            let photo = PlacePhoto {
                id: table.last_photo_id,
                place_id: row.id,
                url,
            };
            table.photos.push(photo);
        }
        table.rows.insert(row.id, row.clone());
        Ok(table.place(&row))
    }

    async fn get_by_id(&self, id: i64) -> Result<Place, AppError> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id)
            .map(|row| table.place(row))
            .ok_or_else(|| AppError::NotFound("place not found".into()))
    }

    async fn get_all(&self) -> Result<Vec<Place>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().map(|row| table.place(row)).collect())
    }

    async fn update(&self, id: i64, input: NewPlace) -> Result<Place, AppError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("place not found".into()))?;
        row.name = input.name;
        row.description = input.description;
        row.longitude = input.longitude;
        row.latitude = input.latitude;
        let row = row.clone();
        Ok(table.place(&row))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(AppError::NotFound("place not found".into()));
        }
        table.photos.retain(|p| p.place_id != id);
        Ok(())
    }

    async fn get_by_country_id(&self, country_id: i64) -> Result<Vec<Place>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|row| row.country_id == Some(country_id))
            .map(|row| table.place(row))
            .collect())
    }

    async fn search_by_name(&self, query: &str, limit: i64) -> Result<Vec<Place>, AppError> {
        let Some(term) = search_term(query) else {
            return Ok(Vec::new());
        };
        let table = self.table.read().await;
        let mut found: Vec<Place> = table
            .rows
            .values()
            .filter(|row| name_matches(&row.name, term))
            .map(|row| table.place(row))
            .collect();
        found.sort_by(|a, b| by_name(&a.name, &b.name));
        found.truncate(limit_to_len(limit));
        Ok(found)
    }
}
