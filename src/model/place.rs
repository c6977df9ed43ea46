use super::Country;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A place as returned by the API. `country` is attached at read time and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub longitude: f64,
    pub latitude: f64,
    /// 0 when the place is not attached to a country.
    pub country_id: i64,
    pub country: Option<Country>,
    pub photo_urls: Vec<String>,
}

impl Place {
    pub fn from_row(row: PlaceRow, photo_urls: Vec<String>) -> Self {
        Place {
            id: row.id,
            name: row.name,
            description: row.description,
            longitude: row.longitude,
            latitude: row.latitude,
            country_id: row.country_id.unwrap_or(0),
            country: None,
            photo_urls,
        }
    }
}

/// `places` table row; `country_id` is NULL when unset.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlaceRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub longitude: f64,
    pub latitude: f64,
    pub country_id: Option<i64>,
}

/// Body of `POST /places/` and `PUT /places/:id`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewPlace {
    pub name: String,
    pub description: String,
    pub longitude: f64,
    pub latitude: f64,
    pub country_id: i64,
    #[serde(alias = "url")]
    pub photo_urls: Vec<String>,
}

impl NewPlace {
    /// Column value for `places.country_id`.
    pub fn country_ref(&self) -> Option<i64> {
        (self.country_id > 0).then_some(self.country_id)
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PlacePhoto {
    pub id: i64,
    pub place_id: i64,
    pub url: String,
}
