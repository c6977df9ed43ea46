//! OpenAPI description of the resource routes, served at `/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::{country, place};
use crate::model::{Country, CreatedCountry, DeletedCountry, NewCountry, NewPlace, Place};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "top-places", description = "Countries, places and place photos"),
    paths(
        country::list_countries,
        country::get_country,
        country::create_country,
        country::update_country,
        country::delete_country,
        country::search_countries,
        place::places_by_country,
        place::create_place,
        place::list_places,
        place::get_place,
        place::update_place,
        place::delete_place,
        place::search_places,
    ),
    components(schemas(
        Country,
        NewCountry,
        CreatedCountry,
        DeletedCountry,
        Place,
        NewPlace,
        ErrorBody,
        ErrorDetail
    )),
    tags(
        (name = "countries", description = "Country CRUD and search"),
        (name = "places", description = "Place CRUD, search and per-country listing")
    )
)]
pub struct ApiDoc;
