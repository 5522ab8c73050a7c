//! In-memory `Store` used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use edulearn_api::models::{
    ContactMessage, Course, CourseInput, NewContactMessage, ResearchProject, ResearchStatus, Stat, TeamMember,
    Testimonial,
};
use edulearn_api::view::fallback;
use edulearn_api::{app, AppError, AppState, Store};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct Tables {
    courses: Vec<Course>,
    testimonials: Vec<Testimonial>,
    team: Vec<TeamMember>,
    research: Vec<ResearchProject>,
    stats: Vec<Stat>,
    contact_messages: Vec<ContactMessage>,
    next_course_id: i32,
    next_contact_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    offline: bool,
}

fn unavailable() -> AppError {
    AppError::StoreUnavailable("connection refused".into())
}

fn not_null(column: &str, value: &Option<String>) -> Result<String, AppError> {
    value
        .clone()
        .ok_or_else(|| AppError::StoreUnavailable(format!("null value in column \"{column}\" violates not-null constraint")))
}

fn newest_first<T, K: Ord>(rows: &[T], key: impl Fn(&T) -> K) -> Vec<T>
where
    T: Clone,
{
    let mut out = rows.to_vec();
    out.sort_by(|a, b| key(b).cmp(&key(a)));
    out
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seeded with the sample data sets.
    pub fn seeded() -> Self {
        let courses = fallback::courses();
        let next_course_id = courses.iter().map(|c| c.id).max().unwrap_or(0);
        Self {
            tables: Mutex::new(Tables {
                courses,
                testimonials: fallback::testimonials(),
                team: fallback::team(),
                research: fallback::research(),
                stats: fallback::stats(),
                contact_messages: Vec::new(),
                next_course_id,
                next_contact_id: 0,
            }),
            offline: false,
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    fn tables(&self) -> Result<std::sync::MutexGuard<'_, Tables>, AppError> {
        if self.offline {
            return Err(unavailable());
        }
        self.tables.lock().map_err(|_| unavailable())
    }

    /// Strictly increasing insertion timestamps.
    fn stamp(rows: usize) -> chrono::DateTime<Utc> {
        Utc::now() + Duration::milliseconds(rows as i64)
    }
}

fn course_from(id: i32, input: &CourseInput, created_at: chrono::DateTime<Utc>) -> Result<Course, AppError> {
    Ok(Course {
        id,
        title: not_null("title", &input.title)?,
        description: input.description.clone(),
        duration: input.duration.clone(),
        level: input.level.clone(),
        price: input.price,
        category: input.category.clone(),
        image_url: input.image_url.clone(),
        features: input.features.clone(),
        created_at,
    })
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(newest_first(&self.tables()?.courses, |c| (c.created_at, c.id)))
    }

    async fn get_course(&self, id: i32) -> Result<Option<Course>, AppError> {
        Ok(self.tables()?.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn create_course(&self, input: &CourseInput) -> Result<Course, AppError> {
        let mut t = self.tables()?;
        let row = course_from(t.next_course_id + 1, input, Self::stamp(t.courses.len()))?;
        t.next_course_id = row.id;
        t.courses.push(row.clone());
        Ok(row)
    }

    async fn update_course(&self, id: i32, input: &CourseInput) -> Result<Option<Course>, AppError> {
        let mut t = self.tables()?;
        let Some(existing) = t.courses.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        *existing = course_from(id, input, existing.created_at)?;
        Ok(Some(existing.clone()))
    }

    async fn delete_course(&self, id: i32) -> Result<bool, AppError> {
        let mut t = self.tables()?;
        let before = t.courses.len();
        t.courses.retain(|c| c.id != id);
        Ok(t.courses.len() < before)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        Ok(newest_first(&self.tables()?.testimonials, |r| (r.created_at, r.id)))
    }

    async fn list_team(&self) -> Result<Vec<TeamMember>, AppError> {
        Ok(newest_first(&self.tables()?.team, |r| (r.created_at, r.id)))
    }

    async fn list_research(&self) -> Result<Vec<ResearchProject>, AppError> {
        Ok(newest_first(&self.tables()?.research, |r| (r.created_at, r.id)))
    }

    async fn get_research(&self, id: i32) -> Result<Option<ResearchProject>, AppError> {
        Ok(self.tables()?.research.iter().find(|r| r.id == id).cloned())
    }

    async fn list_research_by_category(&self, category: &str) -> Result<Vec<ResearchProject>, AppError> {
        let rows = self.list_research().await?;
        Ok(rows.into_iter().filter(|r| r.category == category).collect())
    }

    async fn list_research_by_status(&self, status: ResearchStatus) -> Result<Vec<ResearchProject>, AppError> {
        let rows = self.list_research().await?;
        Ok(rows.into_iter().filter(|r| r.status == status).collect())
    }

    async fn list_stats(&self) -> Result<Vec<Stat>, AppError> {
        Ok(self.tables()?.stats.clone())
    }

    async fn create_contact_message(&self, input: &NewContactMessage) -> Result<ContactMessage, AppError> {
        let mut t = self.tables()?;
        let row = ContactMessage {
            id: t.next_contact_id + 1,
            name: not_null("name", &input.name)?,
            email: not_null("email", &input.email)?,
            phone: input.phone.clone(),
            subject: input.subject.clone(),
            message: not_null("message", &input.message)?,
            created_at: Self::stamp(t.contact_messages.len()),
        };
        t.next_contact_id = row.id;
        t.contact_messages.push(row.clone());
        Ok(row)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        Ok(newest_first(&self.tables()?.contact_messages, |r| (r.created_at, r.id)))
    }

    async fn close(&self) {}
}

pub fn router(store: MemoryStore) -> Router {
    app(AppState::new(Arc::new(store)))
}

/// Send one request through the router; returns status and raw body bytes.
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("failed to build request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    };
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, bytes.to_vec())
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).expect("response body was not json");
    (status, json)
}

/// Send a raw text body with an optional `Content-Type`; the response is parsed as JSON.
pub async fn send_text(app: &Router, method: &str, uri: &str, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let req = builder.body(Body::from(body.to_string())).expect("failed to build request");
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = serde_json::from_slice(&bytes).expect("response body was not json");
    (status, json)
}
