//! HTTP handlers, one module per resource. No handler depends on another.

pub mod contact;
pub mod courses;
pub mod research;
pub mod stats;
pub mod team;
pub mod testimonials;

use crate::error::AppError;

/// Path ids are integers; anything else cannot match a row and is reported as not found.
fn parse_id(id_str: &str, resource: &'static str) -> Result<i32, AppError> {
    id_str.trim().parse().map_err(|_| AppError::NotFound(resource))
}
