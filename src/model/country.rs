use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored country row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub capital: String,
    pub language: String,
    pub currency: String,
    pub description: String,
    pub photo_url: String,
}

/// Body of `POST /countries/` and `PUT /countries/:id`. Absent strings become empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewCountry {
    pub name: String,
    pub capital: String,
    pub language: String,
    pub currency: String,
    pub description: String,
    #[serde(alias = "url")]
    pub photo_url: String,
}

impl NewCountry {
    pub fn into_country(self, id: i64) -> Country {
        Country {
            id,
            name: self.name,
            capital: self.capital,
            language: self.language,
            currency: self.currency,
            description: self.description,
            photo_url: self.photo_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedCountry {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedCountry {
    pub status: String,
    pub deleted_id: i64,
}

impl DeletedCountry {
    pub fn new(deleted_id: i64) -> Self {
        DeletedCountry {
            status: "success".into(),
            deleted_id,
        }
    }
}
