//! PostgreSQL implementation of `Store`. Every method is one parameterized statement.

use crate::error::AppError;
use crate::models::{
    ContactMessage, Course, CourseInput, NewContactMessage, ResearchProject, ResearchStatus, Stat, TeamMember,
    Testimonial,
};
use crate::store::Store;
use async_trait::async_trait;
use sqlx::PgPool;

const COURSE_COLUMNS: &str = "id, title, description, duration, level, price, category, image_url, features, created_at";
const RESEARCH_COLUMNS: &str = "id, title, summary, description, lead_researcher, research_team, duration, status, \
    category, tags, publications, funding_source, budget, start_date, end_date, image_url, project_link, findings, \
    impact, created_at, updated_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_research(&self, sql: &str, param: Option<&str>) -> Result<Vec<ResearchProject>, AppError> {
        tracing::debug!(sql = %sql, param = ?param, "query");
        let mut query = sqlx::query_as::<_, ResearchProject>(sql);
        if let Some(p) = param {
            query = query.bind(p);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM courses ORDER BY created_at DESC, id DESC");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Course>(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_course(&self, id: i32) -> Result<Option<Course>, AppError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Course>(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn create_course(&self, input: &CourseInput) -> Result<Course, AppError> {
        let sql = format!(
            "INSERT INTO courses (title, description, duration, level, price, category, image_url, features) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {COURSE_COLUMNS}"
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Course>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.duration)
            .bind(&input.level)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.features)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_course(&self, id: i32, input: &CourseInput) -> Result<Option<Course>, AppError> {
        let sql = format!(
            "UPDATE courses SET title = $1, description = $2, duration = $3, level = $4, price = $5, \
             category = $6, image_url = $7, features = $8 WHERE id = $9 RETURNING {COURSE_COLUMNS}"
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Course>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.duration)
            .bind(&input.level)
            .bind(input.price)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.features)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_course(&self, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM courses WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        let sql = "SELECT id, name, role, message, rating, photo_url, created_at FROM testimonials \
                   ORDER BY created_at DESC, id DESC";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Testimonial>(sql).fetch_all(&self.pool).await?)
    }

    async fn list_team(&self) -> Result<Vec<TeamMember>, AppError> {
        let sql = "SELECT id, name, role, bio, photo_url, social_links, created_at FROM team \
                   ORDER BY created_at DESC, id DESC";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, TeamMember>(sql).fetch_all(&self.pool).await?)
    }

    async fn list_research(&self) -> Result<Vec<ResearchProject>, AppError> {
        let sql = format!("SELECT {RESEARCH_COLUMNS} FROM research ORDER BY created_at DESC, id DESC");
        self.fetch_research(&sql, None).await
    }

    async fn get_research(&self, id: i32) -> Result<Option<ResearchProject>, AppError> {
        let sql = format!("SELECT {RESEARCH_COLUMNS} FROM research WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, ResearchProject>(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn list_research_by_category(&self, category: &str) -> Result<Vec<ResearchProject>, AppError> {
        let sql = format!(
            "SELECT {RESEARCH_COLUMNS} FROM research WHERE category = $1 ORDER BY created_at DESC, id DESC"
        );
        self.fetch_research(&sql, Some(category)).await
    }

    async fn list_research_by_status(&self, status: ResearchStatus) -> Result<Vec<ResearchProject>, AppError> {
        let sql = format!(
            "SELECT {RESEARCH_COLUMNS} FROM research WHERE status = $1 ORDER BY created_at DESC, id DESC"
        );
        self.fetch_research(&sql, Some(status.as_str())).await
    }

    async fn list_stats(&self) -> Result<Vec<Stat>, AppError> {
        let sql = "SELECT id, label, value, icon FROM stats ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Stat>(sql).fetch_all(&self.pool).await?)
    }

    async fn create_contact_message(&self, input: &NewContactMessage) -> Result<ContactMessage, AppError> {
        let sql = "INSERT INTO contact_messages (name, email, phone, subject, message) \
                   VALUES ($1, $2, $3, $4, $5) \
                   RETURNING id, name, email, phone, subject, message, created_at";
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, ContactMessage>(sql)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let sql = "SELECT id, name, email, phone, subject, message, created_at FROM contact_messages \
                   ORDER BY created_at DESC, id DESC";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, ContactMessage>(sql).fetch_all(&self.pool).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}
