//! Course catalog: the only resource with full CRUD.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::CourseInput;
use crate::response::{created, message, ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

const RESOURCE: &str = "Course";

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_courses().await?;
    Ok(ok(rows))
}

pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    let row = state.store.get_course(id).await?.ok_or(AppError::NotFound(RESOURCE))?;
    Ok(ok(row))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CourseInput>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.create_course(&body).await?;
    tracing::info!(id = row.id, "course created");
    Ok(created(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<CourseInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    let row = state
        .store
        .update_course(id, &body)
        .await?
        .ok_or(AppError::NotFound(RESOURCE))?;
    Ok(ok(row))
}

pub async fn delete(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    if !state.store.delete_course(id).await? {
        return Err(AppError::NotFound(RESOURCE));
    }
    tracing::info!(id, "course deleted");
    Ok(message("Course deleted successfully"))
}
