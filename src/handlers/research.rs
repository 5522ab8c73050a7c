//! Research projects: list, read, and the category/status views.

use super::parse_id;
use crate::error::AppError;
use crate::models::ResearchStatus;
use crate::response::ok;
use crate::service::category_summary;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

const RESOURCE: &str = "Research";

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.store.list_research().await?))
}

pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, RESOURCE)?;
    let row = state.store.get_research(id).await?.ok_or(AppError::NotFound(RESOURCE))?;
    Ok(ok(row))
}

pub async fn categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list_research().await?;
    Ok(ok(category_summary(&rows)))
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.store.list_research_by_category(&category).await?))
}

/// Unknown statuses match nothing; they are not an error.
pub async fn by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rows = match status.parse::<ResearchStatus>() {
        Ok(status) => state.store.list_research_by_status(status).await?,
        Err(_) => Vec::new(),
    };
    Ok(ok(rows))
}
