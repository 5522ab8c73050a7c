use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only through the API; rows are seeded externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub message: String,
    pub rating: i32,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
