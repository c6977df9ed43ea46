//! Storage gateway: pool creation and start-up bootstrap of the database and tables.

use crate::config::AppConfig;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Table DDL in dependency order. Idempotent.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS countries (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        capital TEXT NOT NULL,
        language TEXT NOT NULL DEFAULT '',
        currency TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        photo_url TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS places (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        longitude DOUBLE PRECISION NOT NULL DEFAULT 0,
        latitude DOUBLE PRECISION NOT NULL DEFAULT 0,
        country_id BIGINT REFERENCES countries (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS places_country_id_idx ON places (country_id)",
    r#"
    CREATE TABLE IF NOT EXISTS place_photos (
        id BIGSERIAL PRIMARY KEY,
        place_id BIGINT NOT NULL REFERENCES places (id),
        url TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS place_photos_place_id_idx ON place_photos (place_id)",
];

/// Open the pool; when `ensure_schema` is set, create the database and tables first.
pub async fn connect(config: &AppConfig) -> Result<PgPool, AppError> {
    if config.ensure_schema {
        ensure_database_exists(&config.database_url).await?;
    }
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(AppError::storage("failed to connect to database"))?;
    if config.ensure_schema {
        ensure_schema(&pool).await?;
    }
    Ok(pool)
}

pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in SCHEMA {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .map_err(AppError::storage("failed to create schema"))?;
    }
    tracing::info!(tables = "countries, places, place_photos", "schema ready");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|_| invalid_url("not a PostgreSQL connection string"))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(AppError::Db)?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url.rfind('/').ok_or_else(|| invalid_url("no database path"))? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

/// The URL may carry credentials, so it is left out of the error.
fn invalid_url(reason: &'static str) -> AppError {
    AppError::Config(ConfigError::Invalid {
        key: "DATABASE_URL",
        value: "<redacted>".to_string(),
        reason,
    })
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
