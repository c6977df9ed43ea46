//! Router assembly: route tables plus the interceptor chain.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::middleware::cors;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router. Interceptors run in order: request tracing, CORS, body limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(cors))
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
