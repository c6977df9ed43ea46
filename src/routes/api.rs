//! Resource route table. Collection paths are served with and without the trailing slash.

use crate::handlers::country::{
    create_country, delete_country, get_country, list_countries, search_countries, update_country,
};
use crate::handlers::place::{
    create_place, delete_place, get_place, list_places, places_by_country, search_places,
    update_place,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/countries/", get(list_countries).post(create_country))
        .route("/countries", get(list_countries).post(create_country))
        .route("/countries/search", get(search_countries))
        .route(
            "/countries/:id",
            get(get_country).put(update_country).delete(delete_country),
        )
        .route("/countries/:id/places", get(places_by_country))
        .route("/places/", get(list_places).post(create_place))
        .route("/places", get(list_places).post(create_place))
        .route("/places/search", get(search_places))
        .route(
            "/places/:id",
            get(get_place).put(update_place).delete(delete_place),
        )
        .with_state(state)
}
