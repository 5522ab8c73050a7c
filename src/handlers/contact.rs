//! Contact form: append-only. There is no update or delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::NewContactMessage;
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn submit(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewContactMessage>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.create_contact_message(&body).await?;
    tracing::info!(id = row.id, "contact message received");
    Ok(created(row))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(state.store.list_contact_messages().await?))
}
