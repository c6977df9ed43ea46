//! top-places: REST backend for countries and places, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, app, common_routes};
pub use service::{CountryService, PlaceService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_schema};
