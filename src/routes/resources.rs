//! Resource routes: one path family per resource handler module.

use crate::handlers::{contact, courses, research, stats, team, testimonials};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/courses", get(courses::list).post(courses::create))
        .route(
            "/courses/:id",
            get(courses::read).put(courses::update).delete(courses::delete),
        )
        .route("/testimonials", get(testimonials::list))
        .route("/team", get(team::list))
        .route("/research", get(research::list))
        .route("/research/categories", get(research::categories))
        .route("/research/category/:category", get(research::by_category))
        .route("/research/status/:status", get(research::by_status))
        .route("/research/:id", get(research::read))
        .route("/stats", get(stats::list))
        .route("/contact", get(contact::list).post(contact::submit))
        .with_state(state)
}
