//! Common routes: health. Never touches the Store.

use crate::response::MessageBody;
use axum::{routing::get, Json, Router};

pub const HEALTH_MESSAGE: &str = "EduLearn API is running!";

async fn health() -> Json<MessageBody> {
    Json(MessageBody::new(HEALTH_MESSAGE))
}

/// GET /health, stateless.
pub fn common_routes() -> Router {
    Router::new().route("/health", get(health))
}
