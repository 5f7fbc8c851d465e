use sqlx::PgPool;

use super::types::ReviewRow;

/// Find the rows whose `factory_name` equals `factory_name` exactly.
///
/// Returns at most two rows: enough for the caller to tell "exactly one" from
/// "duplicates" without pulling the whole table on a bad key.
pub async fn find_by_factory_name(pool: &PgPool, factory_name: &str) -> Result<Vec<ReviewRow>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT row_to_json(r)::text \
         FROM annual_reviews r \
         WHERE r.factory_name = $1 \
         LIMIT 2",
    )
    .bind(factory_name)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|(json,)| serde_json::from_str::<ReviewRow>(&json).map_err(|e| sqlx::Error::Decode(Box::new(e))))
        .collect()
}

/// Count stored reviews.
pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM annual_reviews")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// Insert one review row given as a JSON object keyed by column name.
pub async fn insert_json(pool: &PgPool, row: &serde_json::Value) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO annual_reviews ( \
             factory_name, first_cooperation_date, first_product, total_sales_2025, yoy_growth, \
             monthly_sales, top_product_name, top_product_total_sales, top_product_monthly_stores, \
             highlight_month, highlight_amount, highlight_stores) \
         SELECT factory_name, first_cooperation_date, first_product, total_sales_2025, yoy_growth, \
                monthly_sales, top_product_name, top_product_total_sales, top_product_monthly_stores, \
                highlight_month, highlight_amount, highlight_stores \
         FROM jsonb_populate_record(NULL::annual_reviews, $1::jsonb)",
    )
    .bind(row.to_string())
    .execute(pool)
    .await?;
    Ok(())
}
