//! Shared test infrastructure for HTTP and lookup tests.
//!
//! - `MemorySource` - an in-memory `annual_reviews` table
//! - `sample_row()` / `sample_rows()` - review rows shaped like the remote table
//! - `csrf_token()` / `session_cookie()` - helpers for driving the deck over HTTP

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use regex::Regex;
use serde_json::{Value, json};

use partner_review::models::review::{FetchError, ReviewRow, ReviewSource};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const KNOWN_FACTORY: &str = "华东示例制药有限公司";
pub const STRING_NUMERIC_FACTORY: &str = "南方样例药业";
pub const DUPLICATED_FACTORY: &str = "重名药厂";
pub const NAN_FACTORY: &str = "坏数据药业";
pub const LONG_SERIES_FACTORY: &str = "长序列医药集团";

/// Entries in the long sales series.
pub const LONG_SERIES_LEN: usize = 60;

// ============================================================================
// IN-MEMORY SOURCE
// ============================================================================

/// Review rows held in memory as they come off the wire (`row_to_json`).
/// Rows are decoded on lookup, so a bad row fails like it does in Postgres.
/// `failing` simulates a broken connection.
pub struct MemorySource {
    rows: Mutex<Vec<Value>>,
    failing: bool,
    lookups: AtomicUsize,
}

impl MemorySource {
    pub fn new(rows: Vec<Value>) -> Self {
        MemorySource { rows: Mutex::new(rows), failing: false, lookups: AtomicUsize::new(0) }
    }

    pub fn failing() -> Self {
        MemorySource { rows: Mutex::new(Vec::new()), failing: true, lookups: AtomicUsize::new(0) }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Delete every row with this factory name.
    pub fn remove(&self, factory_name: &str) {
        self.rows
            .lock()
            .expect("rows lock")
            .retain(|r| r["factory_name"] != factory_name);
    }
}

impl ReviewSource for MemorySource {
    async fn find_rows(&self, factory_name: &str) -> Result<Vec<ReviewRow>, FetchError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(FetchError::Transport("connection refused".to_string()));
        }
        let rows = self.rows.lock().expect("rows lock");
        rows.iter()
            .filter(|r| r["factory_name"] == factory_name)
            .take(2)
            .map(|r| serde_json::from_value(r.clone()).map_err(|e| FetchError::Transport(e.to_string())))
            .collect()
    }
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

const MONTHS: [&str; 12] = ["1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月"];

fn series(amounts: [f64; 12]) -> Value {
    MONTHS
        .iter()
        .zip(amounts)
        .map(|(month, amount)| json!({ "month": month, "amount": amount }))
        .collect()
}

/// A fully populated row with plain numeric columns.
pub fn sample_row() -> Value {
    json!({
        "id": 1,
        "factory_name": KNOWN_FACTORY,
        "first_cooperation_date": "2021年3月18日",
        "first_product": "阿莫西林胶囊",
        "total_sales_2025": 8765432,
        "yoy_growth": 36.8,
        "monthly_sales": series([520000.0, 480000.0, 610000.0, 655000.0, 702000.0, 688000.0,
                                 731000.0, 802000.0, 765000.0, 840000.0, 910000.0, 1061432.0]),
        "top_product_name": "布洛芬缓释胶囊",
        "top_product_total_sales": 1234567,
        "top_product_monthly_stores": series([62000.0, 71000.0, 88000.0, 93000.0, 101000.0, 99000.0,
                                              115000.0, 128000.0, 117000.0, 121000.0, 112000.0, 127567.0]),
        "highlight_month": "8月",
        "highlight_amount": 128000,
        "highlight_stores": 1532
    })
}

/// A row whose numeric columns come back as strings.
pub fn string_numeric_row() -> Value {
    json!({
        "factory_name": STRING_NUMERIC_FACTORY,
        "first_cooperation_date": "2023年7月1日",
        "first_product": "维生素C泡腾片",
        "total_sales_2025": "2350000",
        "yoy_growth": "12.5",
        "monthly_sales": [],
        "top_product_name": "复方甘草片",
        "top_product_total_sales": "456789",
        "top_product_monthly_stores": [],
        "highlight_month": "12月",
        "highlight_amount": "43789",
        "highlight_stores": "688"
    })
}

/// A row holding a `NUMERIC 'NaN'`, which `row_to_json` emits as a string.
pub fn nan_row() -> Value {
    json!({ "factory_name": NAN_FACTORY, "total_sales_2025": "NaN", "yoy_growth": 3 })
}

/// A row with `LONG_SERIES_LEN` entries in both series.
pub fn long_series_row() -> Value {
    let long: Value = (0..LONG_SERIES_LEN)
        .map(|i| json!({ "month": format!("第{}期", i + 1), "amount": 100000 + i * 1731, "stores": 400 + i }))
        .collect();
    json!({
        "factory_name": LONG_SERIES_FACTORY,
        "first_cooperation_date": "2019年1月2日",
        "first_product": "连花清瘟胶囊",
        "total_sales_2025": 98765432.5,
        "yoy_growth": 8.25,
        "monthly_sales": long.clone(),
        "top_product_name": "连花清瘟胶囊",
        "top_product_total_sales": 55555555,
        "top_product_monthly_stores": long,
        "highlight_month": "第42期",
        "highlight_amount": 170902,
        "highlight_stores": 441
    })
}

/// The sample table: the partners above plus a duplicated name.
pub fn sample_rows() -> Vec<Value> {
    vec![
        sample_row(),
        string_numeric_row(),
        json!({ "factory_name": DUPLICATED_FACTORY }),
        json!({ "factory_name": DUPLICATED_FACTORY }),
        nan_row(),
        long_series_row(),
    ]
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

/// Pull the CSRF token out of a rendered slide.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page should carry a CSRF token")
}

/// The session cookie set by a response, if any.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
}

/// URL-encoded form body.
pub fn form(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).expect("form encoding")
}

/// Build the deck app around a `web::Data<MemorySource>`.
macro_rules! deck_app {
    ($source:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(partner_review::session::middleware(actix_web::cookie::Key::generate(), false))
                .app_data($source.clone())
                .configure(partner_review::handlers::configure::<common::MemorySource>)
                .default_service(actix_web::web::to(partner_review::handlers::not_found)),
        )
        .await
    };
}

/// Send a request carrying the session cookie in `$jar`, updating the jar
/// from the response.
macro_rules! visit {
    ($app:expr, $jar:expr, $req:expr) => {{
        let mut req = $req;
        if let Some(c) = &$jar {
            req = req.cookie(c.clone());
        }
        let resp = actix_web::test::call_service(&$app, req.to_request()).await;
        if let Some(c) = common::session_cookie(&resp) {
            $jar = Some(c);
        }
        resp
    }};
}

/// GET / and return the rendered HTML.
macro_rules! page {
    ($app:expr, $jar:expr) => {{
        let resp = visit!($app, $jar, actix_web::test::TestRequest::get().uri("/"));
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let body = actix_web::test::read_body(resp).await;
        String::from_utf8(body.to_vec()).expect("utf-8 page")
    }};
}
