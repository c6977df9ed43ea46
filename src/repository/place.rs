//! `places` and `place_photos` table access.

use super::{like_pattern, search_term, PlaceRepository};
use crate::error::AppError;
use crate::model::{NewPlace, Place, PlacePhoto, PlaceRow};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, description, longitude, latitude, country_id";

#[derive(Clone)]
pub struct PgPlaceRepository {
    pool: PgPool,
}

impl PgPlaceRepository {
    pub fn new(pool: PgPool) -> Self {
        PgPlaceRepository { pool }
    }

    async fn photo_urls(&self, place_id: i64) -> Result<Vec<String>, AppError> {
        let photos: Vec<PlacePhoto> =
            sqlx::query_as("SELECT id, place_id, url FROM place_photos WHERE place_id = $1 ORDER BY id")
                .bind(place_id)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::storage("failed to get photos"))?;
        Ok(photos.into_iter().map(|p| p.url).collect())
    }

    /// One photo query per row.
    async fn with_photos(&self, rows: Vec<PlaceRow>) -> Result<Vec<Place>, AppError> {
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let photos = self.photo_urls(row.id).await?;
            out.push(Place::from_row(row, photos));
        }
        Ok(out)
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    async fn create(&self, input: NewPlace) -> Result<Place, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(AppError::storage("failed to begin transaction"))?;
        let sql = format!(
            r#"
            INSERT INTO places (name, description, longitude, latitude, country_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            COLUMNS
        );
        tracing::debug!(sql = %sql, params = ?input, "query (tx)");
        let row: PlaceRow = sqlx::query_as(&sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.longitude)
            .bind(input.latitude)
            .bind(input.country_ref())
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::storage("failed to create place"))?;

        let mut photos = Vec::with_capacity(input.photo_urls.len());
        for url in &input.photo_urls {
            let photo: PlacePhoto = sqlx::query_as(
                "INSERT INTO place_photos (place_id, url) VALUES ($1, $2) RETURNING id, place_id, url",
            )
            .bind(row.id)
            .bind(url)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::storage("failed to add photo"))?;
            photos.push(photo.url);
        }

        tx.commit()
            .await
            .map_err(AppError::storage("failed to commit place create"))?;
        tracing::info!(place_id = row.id, photos = photos.len(), "place created");
        Ok(Place::from_row(row, photos))
    }

    async fn get_by_id(&self, id: i64) -> Result<Place, AppError> {
        let sql = format!("SELECT {} FROM places WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row: PlaceRow = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::storage("failed to get place"))?
            .ok_or_else(|| AppError::NotFound("place not found".into()))?;
        let photos = self.photo_urls(id).await?;
        Ok(Place::from_row(row, photos))
    }

    async fn get_all(&self) -> Result<Vec<Place>, AppError> {
        let sql = format!("SELECT {} FROM places ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<PlaceRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::storage("failed to get places"))?;
        self.with_photos(rows).await
    }

    async fn update(&self, id: i64, input: NewPlace) -> Result<Place, AppError> {
        let sql = format!(
            r#"
            UPDATE places
            SET name = $2, description = $3, longitude = $4, latitude = $5
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, params = ?input, "query");
        let row: PlaceRow = sqlx::query_as(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.longitude)
            .bind(input.latitude)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::storage("failed to update place"))?
            .ok_or_else(|| AppError::NotFound("place not found".into()))?;
        let photos = self.photo_urls(id).await?;
        Ok(Place::from_row(row, photos))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(AppError::storage("failed to begin transaction"))?;
        let photos = sqlx::query("DELETE FROM place_photos WHERE place_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::storage("failed to delete photos"))?;
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::storage("failed to delete place"))?;
        if result.rows_affected() == 0 {
            // dropping tx rolls back
            return Err(AppError::NotFound("place not found".into()));
        }
        tx.commit()
            .await
            .map_err(AppError::storage("failed to commit place delete"))?;
        tracing::info!(place_id = id, photos = photos.rows_affected(), "place deleted");
        Ok(())
    }

    async fn get_by_country_id(&self, country_id: i64) -> Result<Vec<Place>, AppError> {
        let sql = format!("SELECT {} FROM places WHERE country_id = $1 ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, country_id, "query");
        let rows: Vec<PlaceRow> = sqlx::query_as(&sql)
            .bind(country_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::storage("failed to get places by country"))?;
        self.with_photos(rows).await
    }

    async fn search_by_name(&self, query: &str, limit: i64) -> Result<Vec<Place>, AppError> {
        let Some(term) = search_term(query) else {
            return Ok(Vec::new());
        };
        let sql = format!(
            "SELECT {} FROM places WHERE name ILIKE $1 ORDER BY name LIMIT $2",
            COLUMNS
        );
        let pattern = like_pattern(term);
        tracing::debug!(sql = %sql, pattern = %pattern, limit, "query");
        let rows: Vec<PlaceRow> = sqlx::query_as(&sql)
            .bind(&pattern)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::storage("failed to search places"))?;
        self.with_photos(rows).await
    }
}
