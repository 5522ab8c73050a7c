use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchStatus {
    Ongoing,
    Completed,
    Upcoming,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown research status '{0}'")]
pub struct UnknownStatus(pub String);

impl ResearchStatus {
    pub const ALL: [ResearchStatus; 3] = [Self::Ongoing, Self::Completed, Self::Upcoming];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for ResearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResearchStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for ResearchStatus {
    type Error = UnknownStatus;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ResearchProject {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub description: Option<String>,
    pub lead_researcher: Option<String>,
    pub research_team: Vec<String>,
    pub duration: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ResearchStatus,
    pub category: String,
    pub tags: Vec<String>,
    pub publications: Vec<String>,
    pub funding_source: Option<String>,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub project_link: Option<String>,
    pub findings: Option<String>,
    pub impact: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry of the category aggregate; id 0 is the synthetic "All" entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchCategory {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub research_count: i64,
}
