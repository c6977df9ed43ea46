//! PostgreSQL repository tests. Skipped unless `TEST_DATABASE_URL` points at a disposable database.

use sqlx::PgPool;
use std::time::{SystemTime, UNIX_EPOCH};
use top_places::model::{NewCountry, NewPlace};
use top_places::repository::{CountryRepository, PgCountryRepository, PgPlaceRepository, PlaceRepository};
use top_places::{ensure_database_exists, ensure_schema, AppError};

async fn pool() -> Option<PgPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    ensure_database_exists(&url).await.unwrap();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    Some(pool)
}

/// Name prefix unique to this run so tests can share tables.
fn unique(tag: &str) -> String {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    format!("{}-{}", tag, nanos)
}

async fn photo_rows(pool: &PgPool, place_id: i64) -> i64 {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM place_photos WHERE place_id = $1")
        .bind(place_id)
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

#[tokio::test]
async fn country_round_trip_and_delete() {
    let Some(pool) = pool().await else { return };
    let repo = PgCountryRepository::new(pool);
    let input = NewCountry {
        name: unique("Testland"),
        capital: "Testville".into(),
        language: "Testish".into(),
        currency: "TST".into(),
        description: "for tests".into(),
        photo_url: "https://img/t.png".into(),
    };

    let id = repo.add(input.clone()).await.unwrap();
    assert_eq!(repo.get_by_id(id).await.unwrap(), input.into_country(id));

    assert_eq!(repo.delete(id).await.unwrap(), id);
    assert!(matches!(repo.delete(id).await, Err(AppError::NotFound(_))));
    assert!(matches!(repo.get_by_id(id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn country_update_of_missing_row_is_not_found() {
    let Some(pool) = pool().await else { return };
    let repo = PgCountryRepository::new(pool);
    let err = repo
        .update(
            i64::MAX,
            NewCountry {
                name: "x".into(),
                capital: "y".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn place_photos_are_created_and_deleted_with_the_place() {
    let Some(pool) = pool().await else { return };
    let countries = PgCountryRepository::new(pool.clone());
    let places = PgPlaceRepository::new(pool.clone());
    let cid = countries
        .add(NewCountry {
            name: unique("Photoland"),
            capital: "Lens".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    let urls = vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()];
    let place = places
        .create(NewPlace {
            name: unique("Gallery"),
            country_id: cid,
            photo_urls: urls.clone(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(place.photo_urls, urls);
    assert_eq!(places.get_by_id(place.id).await.unwrap().photo_urls, urls);
    assert_eq!(photo_rows(&pool, place.id).await, 3);

    let listed = places.get_by_country_id(cid).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].photo_urls, urls);

    places.delete(place.id).await.unwrap();
    assert_eq!(photo_rows(&pool, place.id).await, 0);
    assert!(matches!(places.get_by_id(place.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(places.delete(place.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn failed_photo_insert_rolls_back_the_place() {
    let Some(pool) = pool().await else { return };
    let places = PgPlaceRepository::new(pool.clone());
    let name = unique("Halfway");
    let ok_url = format!("{}-ok.jpg", name);

    let err = places
        .create(NewPlace {
            name: name.clone(),
            photo_urls: vec![ok_url.clone(), "bad\u{0}.jpg".to_string()],
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Storage { .. }), "{}", err);

    let (place_rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM places WHERE name = $1")
        .bind(&name)
        .fetch_one(&pool)
        .await
        .unwrap();
    let (photo_rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM place_photos WHERE url = $1")
        .bind(&ok_url)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(place_rows, 0);
    assert_eq!(photo_rows, 0);
}

#[tokio::test]
async fn search_treats_like_wildcards_literally() {
    let Some(pool) = pool().await else { return };
    let repo = PgCountryRepository::new(pool);
    let tag = unique("srch");
    for name in [format!("{} 100% Land", tag), format!("{} 1000 Land", tag)] {
        repo.add(NewCountry {
            name,
            capital: "c".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    }

    let found = repo.search_by_name(&format!("{} 100%", tag), 10).await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].name.contains("100%"));

    let found = repo.search_by_name(&tag.to_uppercase(), 1).await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(repo.search_by_name("   ", 10).await.unwrap().is_empty());
}
