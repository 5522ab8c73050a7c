use serde::{Deserialize, Serialize};

/// Headline figure on the home page. The table carries no timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Stat {
    pub id: i32,
    pub label: String,
    pub value: i64,
    pub icon: Option<String>,
}
