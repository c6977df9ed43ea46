use super::require_non_empty;
use crate::error::AppError;
use crate::model::{Country, NewCountry};
use crate::repository::CountryRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct CountryService {
    repo: Arc<dyn CountryRepository>,
}

impl CountryService {
    pub fn new(repo: Arc<dyn CountryRepository>) -> Self {
        CountryService { repo }
    }

    pub async fn list(&self) -> Result<Vec<Country>, AppError> {
        self.repo.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Country, AppError> {
        self.repo.get_by_id(id).await
    }

    pub async fn add(&self, input: NewCountry) -> Result<i64, AppError> {
        validate(&input)?;
        self.repo.add(input).await
    }

    /// Checks the country exists before validating and applying the change.
    pub async fn update(&self, id: i64, input: NewCountry) -> Result<Country, AppError> {
        self.repo.get_by_id(id).await.map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound("country not found".into()),
            other => other,
        })?;
        validate(&input)?;
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<i64, AppError> {
        self.repo.delete(id).await
    }

    pub async fn search(&self, query: &str, limit: i64) -> Result<Vec<Country>, AppError> {
        self.repo.search_by_name(query, limit).await
    }
}

fn validate(input: &NewCountry) -> Result<(), AppError> {
    require_non_empty("name", &input.name)?;
    require_non_empty("capital", &input.capital)
}
