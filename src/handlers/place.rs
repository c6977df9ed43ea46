//! Place handlers, including the places of one country.

use super::SearchParams;
use crate::error::{AppError, ErrorBody};
use crate::extractors::{IdPath, JsonBody, SearchQuery};
use crate::model::{NewPlace, Place};
use crate::response::{created, no_content, ok};
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

#[utoipa::path(
    post,
    path = "/places/",
    tag = "places",
    request_body = NewPlace,
    responses(
        (status = 201, description = "Place created with its photos", body = Place),
        (status = 400, description = "Malformed body or missing name", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_place(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewPlace>,
) -> Result<impl IntoResponse, AppError> {
    let place = state.places.create(body).await?;
    Ok(created(place))
}

#[utoipa::path(
    get,
    path = "/places/",
    tag = "places",
    responses(
        (status = 200, description = "All places with country and photos", body = Vec<Place>),
        (status = 500, description = "Storage or integrity failure", body = ErrorBody)
    )
)]
pub async fn list_places(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let places = state.places.get_all().await?;
    Ok(ok(places))
}

#[utoipa::path(
    get,
    path = "/places/{id}",
    tag = "places",
    params(("id" = i64, Path, description = "Place ID")),
    responses(
        (status = 200, description = "The place", body = Place),
        (status = 400, description = "Malformed or non-positive id", body = ErrorBody),
        (status = 404, description = "No such place", body = ErrorBody)
    )
)]
pub async fn get_place(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let place = state.places.get_by_id(id).await?;
    Ok(ok(place))
}

#[utoipa::path(
    put,
    path = "/places/{id}",
    tag = "places",
    params(("id" = i64, Path, description = "Place ID")),
    request_body = NewPlace,
    responses(
        (status = 200, description = "Updated place", body = Place),
        (status = 400, description = "Malformed input, missing name or non-positive id", body = ErrorBody),
        (status = 404, description = "No such place", body = ErrorBody)
    )
)]
pub async fn update_place(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody<NewPlace>,
) -> Result<impl IntoResponse, AppError> {
    let place = state.places.update(id, body).await?;
    tracing::info!(place_id = id, "place updated");
    Ok(ok(place))
}

#[utoipa::path(
    delete,
    path = "/places/{id}",
    tag = "places",
    params(("id" = i64, Path, description = "Place ID")),
    responses(
        (status = 204, description = "Place and its photos deleted"),
        (status = 400, description = "Malformed or non-positive id", body = ErrorBody),
        (status = 404, description = "No such place", body = ErrorBody)
    )
)]
pub async fn delete_place(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    state.places.delete(id).await?;
    Ok(no_content())
}

#[utoipa::path(
    get,
    path = "/countries/{id}/places",
    tag = "places",
    params(("id" = i64, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Places in the country", body = Vec<Place>),
        (status = 400, description = "Malformed id", body = ErrorBody)
    )
)]
pub async fn places_by_country(
    State(state): State<AppState>,
    IdPath(country_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let places = state.places.places_by_country(country_id).await?;
    Ok(ok(places))
}

#[utoipa::path(
    get,
    path = "/places/search",
    tag = "places",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching places ordered by name", body = Vec<Place>),
        (status = 500, description = "Storage or integrity failure", body = ErrorBody)
    )
)]
pub async fn search_places(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery,
) -> Result<impl IntoResponse, AppError> {
    let places = state.places.search(params.query(), params.limit()).await?;
    Ok(ok(places))
}
