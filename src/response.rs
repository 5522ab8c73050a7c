//! Response body helpers. Success bodies mirror Store rows directly, without an envelope.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Fixed acknowledgement body, e.g. `{"message": "Course deleted successfully"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    ok(MessageBody::new(message))
}
