pub mod queries;
pub mod types;

use std::fmt;
use std::future::Future;

use sqlx::PgPool;

pub use types::{HighlightMoment, MonthlyAmount, PresentationRecord, ReviewRow, TopProduct};

const NOT_FOUND_MESSAGE: &str = "未找到该厂家数据，请确认名称（需完全一致）";
const TRANSPORT_MESSAGE: &str = "网络请求失败，请稍后再试";

/// Why a record lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// No single row matches the name exactly.
    NotFound,
    /// Anything else: connection, query or row decoding failures.
    Transport(String),
}

impl FetchError {
    /// The message shown inline under the name input.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NotFound => NOT_FOUND_MESSAGE,
            FetchError::Transport(_) => TRANSPORT_MESSAGE,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "Review not found"),
            FetchError::Transport(e) => write!(f, "Review lookup failed: {e}"),
        }
    }
}

impl From<sqlx::Error> for FetchError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => FetchError::NotFound,
            other => FetchError::Transport(other.to_string()),
        }
    }
}

/// Where review rows come from.
///
/// Production uses the Postgres pool; tests plug in an in-memory table.
pub trait ReviewSource {
    /// Rows whose factory name equals `factory_name` exactly (at most two).
    fn find_rows(&self, factory_name: &str) -> impl Future<Output = Result<Vec<ReviewRow>, FetchError>>;
}

impl ReviewSource for PgPool {
    async fn find_rows(&self, factory_name: &str) -> Result<Vec<ReviewRow>, FetchError> {
        Ok(queries::find_by_factory_name(self, factory_name).await?)
    }
}

/// Look up the review for `name` (trimmed, exact match) and normalize it.
///
/// More than one matching row is treated like no match: the lookup is a
/// single-row contract and does not pick among duplicates.
pub async fn fetch_record<S: ReviewSource + ?Sized>(source: &S, name: &str) -> Result<PresentationRecord, FetchError> {
    let name = name.trim();
    let mut rows = source
        .find_rows(name)
        .await
        .inspect_err(|e| log::error!("Review lookup for '{}' failed: {}", name, e))?;
    match rows.len() {
        0 => {
            log::warn!("No annual review for '{}'", name);
            Err(FetchError::NotFound)
        }
        1 => {
            let row = rows.remove(0);
            log::info!("Loaded annual review for '{}'", name);
            Ok(PresentationRecord::from(row))
        }
        n => {
            log::warn!("{} annual reviews share the name '{}', refusing to pick one", n, name);
            Err(FetchError::NotFound)
        }
    }
}
