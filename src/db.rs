use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::models::review::queries;

pub const MIGRATIONS: &str = include_str!("schema.sql");

const DEMO_SEED: &str = include_str!("../data/seed/annual_reviews.json");

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Insert the demo reviews if the table is empty. Returns the number inserted.
pub async fn seed_demo(pool: &PgPool) -> Result<usize, sqlx::Error> {
    let existing = queries::count(pool).await?;
    if existing > 0 {
        log::info!("annual_reviews already has {} rows, skipping demo seed", existing);
        return Ok(0);
    }

    let rows: Vec<serde_json::Value> =
        serde_json::from_str(DEMO_SEED).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    for row in &rows {
        queries::insert_json(pool, row).await?;
    }
    log::info!("Demo seed complete: {} reviews", rows.len());
    Ok(rows.len())
}
