//! `countries` table access.

use super::{like_pattern, search_term, CountryRepository};
use crate::error::AppError;
use crate::model::{Country, NewCountry};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, capital, language, currency, description, photo_url";

#[derive(Clone)]
pub struct PgCountryRepository {
    pool: PgPool,
}

impl PgCountryRepository {
    pub fn new(pool: PgPool) -> Self {
        PgCountryRepository { pool }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn list(&self) -> Result<Vec<Country>, AppError> {
        let sql = format!("SELECT {} FROM countries ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Country>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::storage("failed to list countries"))
    }

    async fn get_by_id(&self, id: i64) -> Result<Country, AppError> {
        let sql = format!("SELECT {} FROM countries WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Country>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::storage("failed to get country"))?
            .ok_or_else(|| AppError::NotFound(format!("country with ID {} not found", id)))
    }

    async fn add(&self, input: NewCountry) -> Result<i64, AppError> {
        let sql = r#"
            INSERT INTO countries (name, capital, language, currency, description, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
        "#;
        tracing::debug!(sql = %sql, params = ?input, "query");
        let (id,): (i64,) = sqlx::query_as(sql)
            .bind(&input.name)
            .bind(&input.capital)
            .bind(&input.language)
            .bind(&input.currency)
            .bind(&input.description)
            .bind(&input.photo_url)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::storage("failed to add country"))?;
        tracing::info!(country_id = id, "country added");
        Ok(id)
    }

    async fn update(&self, id: i64, input: NewCountry) -> Result<Country, AppError> {
        let sql = format!(
            r#"
            UPDATE countries
            SET name = $2, capital = $3, language = $4, currency = $5, description = $6
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, params = ?input, "query");
        let row = sqlx::query_as::<_, Country>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.capital)
            .bind(&input.language)
            .bind(&input.currency)
            .bind(&input.description)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::storage("failed to update country"))?;
        row.ok_or_else(|| AppError::NotFound("country not found".into()))
    }

    async fn delete(&self, id: i64) -> Result<i64, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(AppError::storage("failed to begin transaction"))?;
        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM countries WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::storage("failed to check country existence"))?;
        if existing.is_none() {
            return Err(AppError::NotFound(format!("country with ID {} not found", id)));
        }
        let (deleted_id,): (i64,) = sqlx::query_as("DELETE FROM countries WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::storage("failed to delete country"))?;
        tx.commit()
            .await
            .map_err(AppError::storage("failed to commit country delete"))?;
        tracing::info!(country_id = deleted_id, "country deleted");
        Ok(deleted_id)
    }

    async fn search_by_name(&self, query: &str, limit: i64) -> Result<Vec<Country>, AppError> {
        let Some(term) = search_term(query) else {
            return Ok(Vec::new());
        };
        let sql = format!(
            "SELECT {} FROM countries WHERE name ILIKE $1 ORDER BY name LIMIT $2",
            COLUMNS
        );
        let pattern = like_pattern(term);
        tracing::debug!(sql = %sql, pattern = %pattern, limit, "query");
        sqlx::query_as::<_, Country>(&sql)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::storage("failed to search countries"))
    }
}
