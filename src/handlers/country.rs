//! Country handlers: list, read, create, update, delete, search.

use super::SearchParams;
use crate::error::{AppError, ErrorBody};
use crate::extractors::{IdPath, JsonBody, SearchQuery};
use crate::model::{Country, CreatedCountry, DeletedCountry, NewCountry};
use crate::response::ok;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

/// GET /countries/
#[utoipa::path(
    get,
    path = "/countries/",
    tag = "countries",
    responses(
        (status = 200, description = "All countries", body = Vec<Country>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_countries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let countries = state.countries.list().await?;
    Ok(ok(countries))
}

/// GET /countries/:id
#[utoipa::path(
    get,
    path = "/countries/{id}",
    tag = "countries",
    params(("id" = i64, Path, description = "Country ID")),
    responses(
        (status = 200, description = "The country", body = Country),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such country", body = ErrorBody)
    )
)]
pub async fn get_country(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let country = state.countries.get_by_id(id).await?;
    Ok(ok(country))
}

/// POST /countries/
#[utoipa::path(
    post,
    path = "/countries/",
    tag = "countries",
    request_body = NewCountry,
    responses(
        (status = 200, description = "Country created", body = CreatedCountry),
        (status = 400, description = "Malformed body or missing name/capital", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_country(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewCountry>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.countries.add(body).await?;
    Ok(ok(CreatedCountry { id }))
}

/// PUT /countries/:id
#[utoipa::path(
    put,
    path = "/countries/{id}",
    tag = "countries",
    params(("id" = i64, Path, description = "Country ID")),
    request_body = NewCountry,
    responses(
        (status = 200, description = "Updated country", body = Country),
        (status = 400, description = "Malformed input or missing name/capital", body = ErrorBody),
        (status = 404, description = "No such country", body = ErrorBody)
    )
)]
pub async fn update_country(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody<NewCountry>,
) -> Result<impl IntoResponse, AppError> {
    let country = state.countries.update(id, body).await?;
    tracing::info!(country_id = id, "country updated");
    Ok(ok(country))
}

/// DELETE /countries/:id
#[utoipa::path(
    delete,
    path = "/countries/{id}",
    tag = "countries",
    params(("id" = i64, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Country deleted", body = DeletedCountry),
        (status = 404, description = "No such country", body = ErrorBody)
    )
)]
pub async fn delete_country(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let deleted_id = state.countries.delete(id).await?;
    Ok(ok(DeletedCountry::new(deleted_id)))
}

/// GET /countries/search?q=&limit=
#[utoipa::path(
    get,
    path = "/countries/search",
    tag = "countries",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching countries ordered by name", body = Vec<Country>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn search_countries(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery,
) -> Result<impl IntoResponse, AppError> {
    let countries = state.countries.search(params.query(), params.limit()).await?;
    Ok(ok(countries))
}
