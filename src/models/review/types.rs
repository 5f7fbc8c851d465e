use serde::{Deserialize, Deserializer, Serialize};

/// One month of a sales series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmount {
    #[serde(default, deserialize_with = "lenient_string")]
    pub month: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt_f64")]
    pub stores: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightMoment {
    pub month: String,
    pub amount: f64,
    pub stores: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub name: String,
    pub total_sales: f64,
    pub monthly_stores: Vec<MonthlyAmount>,
    pub highlight_moment: HighlightMoment,
}

/// The normalized annual review of one partner, consumed by every slide.
///
/// Serialized in camelCase both in the session cookie and by the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationRecord {
    pub manufacturer_name: String,
    pub first_cooperation_date: String,
    pub first_product: String,
    pub total_sales_2025: f64,
    pub yoy_growth: f64,
    pub monthly_sales: Vec<MonthlyAmount>,
    pub top_product: TopProduct,
}

/// A row of `annual_reviews` as it comes off the wire (`row_to_json`).
///
/// Numeric columns may be stored as `numeric` or as text, so every number
/// accepts either a JSON number or a numeric string. Nulls become empty
/// strings, zeros or empty series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewRow {
    #[serde(deserialize_with = "lenient_string")]
    pub factory_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_cooperation_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_product: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_sales_2025: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub yoy_growth: f64,
    #[serde(default, deserialize_with = "nullable_series")]
    pub monthly_sales: Vec<MonthlyAmount>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub top_product_name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub top_product_total_sales: f64,
    #[serde(default, deserialize_with = "nullable_series")]
    pub top_product_monthly_stores: Vec<MonthlyAmount>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub highlight_month: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub highlight_amount: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub highlight_stores: f64,
}

impl From<ReviewRow> for PresentationRecord {
    fn from(row: ReviewRow) -> Self {
        PresentationRecord {
            manufacturer_name: row.factory_name,
            first_cooperation_date: row.first_cooperation_date,
            first_product: row.first_product,
            total_sales_2025: row.total_sales_2025,
            yoy_growth: row.yoy_growth,
            monthly_sales: row.monthly_sales,
            top_product: TopProduct {
                name: row.top_product_name,
                total_sales: row.top_product_total_sales,
                monthly_stores: row.top_product_monthly_stores,
                highlight_moment: HighlightMoment {
                    month: row.highlight_month,
                    amount: row.highlight_amount,
                    stores: row.highlight_stores,
                },
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn coerce(value: Option<NumberOrText>) -> Result<Option<f64>, String> {
    match value {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Some(n)),
                _ => Err(format!("not a finite number: {s:?}")),
            }
        }
    }
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    coerce(value).map_err(serde::de::Error::custom)
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?.unwrap_or(0.0))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_series<'de, D>(deserializer: D) -> Result<Vec<MonthlyAmount>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<MonthlyAmount>>::deserialize(deserializer)?.unwrap_or_default())
}
