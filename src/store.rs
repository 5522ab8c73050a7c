//! The Store handle: one async trait covering every operation the Resource Handlers need,
//! plus PostgreSQL pool construction. The handle is created once at startup and injected
//! through `AppState`.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{
    ContactMessage, Course, CourseInput, NewContactMessage, ResearchProject, ResearchStatus, Stat, TeamMember,
    Testimonial,
};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Each method is a single round trip. Lists are newest first unless noted.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError>;
    async fn get_course(&self, id: i32) -> Result<Option<Course>, AppError>;
    async fn create_course(&self, input: &CourseInput) -> Result<Course, AppError>;
    /// Overwrites every writable field. `None` when the id does not exist.
    async fn update_course(&self, id: i32, input: &CourseInput) -> Result<Option<Course>, AppError>;
    /// Returns whether a row was removed.
    async fn delete_course(&self, id: i32) -> Result<bool, AppError>;

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError>;
    async fn list_team(&self) -> Result<Vec<TeamMember>, AppError>;

    async fn list_research(&self) -> Result<Vec<ResearchProject>, AppError>;
    async fn get_research(&self, id: i32) -> Result<Option<ResearchProject>, AppError>;
    async fn list_research_by_category(&self, category: &str) -> Result<Vec<ResearchProject>, AppError>;
    async fn list_research_by_status(&self, status: ResearchStatus) -> Result<Vec<ResearchProject>, AppError>;

    /// Ordered by id; stats carry no timestamp.
    async fn list_stats(&self) -> Result<Vec<Stat>, AppError>;

    async fn create_contact_message(&self, input: &NewContactMessage) -> Result<ContactMessage, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;

    /// Release pooled connections. Called once on shutdown.
    async fn close(&self);
}

/// Build the shared pool from config. Does not create tables; see `apply_migrations`.
pub async fn connect(config: &AppConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Connect to the `postgres` maintenance database and create the target database if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let Some(db_name) = target_database(&opts) else {
        return Ok(());
    };
    let mut conn = admin_options(&opts).connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// The database named by the URL, unless it is absent or the maintenance database itself.
fn target_database(opts: &PgConnectOptions) -> Option<String> {
    opts.get_database()
        .filter(|name| !name.is_empty() && *name != "postgres")
        .map(str::to_string)
}

/// Same host, credentials and TLS settings, pointed at `postgres`.
fn admin_options(opts: &PgConnectOptions) -> PgConnectOptions {
    opts.clone().database("postgres")
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
