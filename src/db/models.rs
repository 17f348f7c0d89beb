use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One sales row as stored in the target table.
///
/// Every source column is nullable: a record keeps whatever fields its CSV
/// line carried and the rest load as NULL. `processed_date` is stamped by
/// the pipeline and always present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct SaleRecord {
    pub timestamp: Option<NaiveDate>,
    pub day: Option<i32>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub user_id: Option<i64>,
    pub processed_date: NaiveDateTime,
}
