//! Router: static {verb, path} table under `/api`, with CORS and request tracing.

mod common;
mod resources;

pub use common::{common_routes, HEALTH_MESSAGE};
pub use resources::resource_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const API_PREFIX: &str = "/api";

/// Full application router.
pub fn app(state: AppState) -> Router {
    let api = common_routes().merge(resource_routes(state));
    Router::new().nest(API_PREFIX, api).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
