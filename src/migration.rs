//! Table DDL for the six resources. Every statement is `IF NOT EXISTS`, so this runs on each startup.

use crate::error::AppError;
use sqlx::PgPool;

const TABLES: &[(&str, &str)] = &[
    (
        "courses",
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            duration TEXT,
            level TEXT,
            price DOUBLE PRECISION,
            category TEXT,
            image_url TEXT,
            features TEXT[] NOT NULL DEFAULT '{}',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "testimonials",
        r#"
        CREATE TABLE IF NOT EXISTS testimonials (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            role TEXT,
            message TEXT NOT NULL,
            rating INTEGER NOT NULL DEFAULT 5 CHECK (rating BETWEEN 1 AND 5),
            photo_url TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "team",
        r#"
        CREATE TABLE IF NOT EXISTS team (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            role TEXT,
            bio TEXT,
            photo_url TEXT,
            social_links JSONB NOT NULL DEFAULT '{}'::jsonb,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "research",
        r#"
        CREATE TABLE IF NOT EXISTS research (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            summary TEXT NOT NULL DEFAULT '',
            description TEXT,
            lead_researcher TEXT,
            research_team TEXT[] NOT NULL DEFAULT '{}',
            duration TEXT,
            status TEXT NOT NULL DEFAULT 'upcoming'
                CHECK (status IN ('ongoing', 'completed', 'upcoming')),
            category TEXT NOT NULL,
            tags TEXT[] NOT NULL DEFAULT '{}',
            publications TEXT[] NOT NULL DEFAULT '{}',
            funding_source TEXT,
            budget DOUBLE PRECISION,
            start_date DATE,
            end_date DATE,
            image_url TEXT,
            project_link TEXT,
            findings TEXT,
            impact TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "stats",
        r#"
        CREATE TABLE IF NOT EXISTS stats (
            id SERIAL PRIMARY KEY,
            label TEXT NOT NULL,
            value BIGINT NOT NULL,
            icon TEXT
        )
        "#,
    ),
    (
        "contact_messages",
        r#"
        CREATE TABLE IF NOT EXISTS contact_messages (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            subject TEXT,
            message TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
];

/// Names of the managed tables, in creation order.
pub fn table_names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|(name, _)| *name)
}

pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(tables = TABLES.len(), "schema up to date");
    Ok(())
}
