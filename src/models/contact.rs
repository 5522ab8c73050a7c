use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only: created by the public form, listed by admins, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Contact form submission. Nothing is validated here; missing required
/// columns are rejected by the Store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}
