use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Writable course fields. Used for both create and full-replacement update:
/// an omitted field is written as NULL (features as an empty list), never kept from the old row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_input_fields_are_null() {
        let input: CourseInput = serde_json::from_str(r#"{"title":"Rust 101","price":19.5}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("Rust 101"));
        assert_eq!(input.price, Some(19.5));
        assert!(input.description.is_none());
        assert!(input.features.is_empty());
    }

    #[test]
    fn course_serializes_snake_case_fields() {
        let course = Course {
            id: 7,
            title: "DevOps Engineering".into(),
            description: None,
            duration: Some("10 weeks".into()),
            level: None,
            price: Some(399.99),
            category: Some("DevOps".into()),
            image_url: Some("/images/course-devops.jpg".into()),
            features: vec!["CI/CD Pipelines".into()],
            created_at: DateTime::<Utc>::default(),
        };
        let v = serde_json::to_value(&course).unwrap();
        assert_eq!(v["image_url"], "/images/course-devops.jpg");
        assert_eq!(v["features"][0], "CI/CD Pipelines");
        assert!(v.get("created_at").is_some());
    }
}
