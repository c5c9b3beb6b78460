use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

// Entities are stored as JSONB documents. Only the columns the queries filter
// or order on are broken out.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS ideas (
        id          UUID PRIMARY KEY,
        status      TEXT NOT NULL,
        data        JSONB NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL,
        updated_at  TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ideas_status_idx ON ideas (status)",
    r#"
    CREATE TABLE IF NOT EXISTS prompts (
        id      UUID PRIMARY KEY,
        title   TEXT NOT NULL,
        status  TEXT NOT NULL,
        data    JSONB NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS prompt_submissions (
        id            UUID PRIMARY KEY,
        status        TEXT NOT NULL,
        data          JSONB NOT NULL,
        submitted_at  TIMESTAMPTZ NOT NULL
    )
    "#,
];

/// Creates the tables if they do not exist yet. Safe to run on every start.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("Failed to apply database schema")?;
    }
    info!("Database schema ready");
    Ok(())
}
