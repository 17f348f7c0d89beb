use crate::db::SaleRecord;
use crate::error::GranaryError;
use crate::etl::extract::RawRecord;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Timestamp layout used by the source files.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y";

/// Parse a source timestamp (`04/28/2023` style) into a date.
pub fn parse_timestamp(value: &str) -> Result<NaiveDate, GranaryError> {
    NaiveDate::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| GranaryError::DateParse {
        value: value.to_string(),
        source,
    })
}

/// Split a date into its `(day, month, year)` partition columns.
pub fn date_partition(date: NaiveDate) -> (i32, i32, i32) {
    (date.day() as i32, date.month() as i32, date.year())
}

/// Turn one raw record into a loadable row stamped with its batch's
/// processing time.
///
/// A record without a timestamp keeps NULL partition columns; a present
/// timestamp that does not match [`TIMESTAMP_FORMAT`] is an error.
pub fn enrich(raw: &RawRecord, processed_date: NaiveDateTime) -> Result<SaleRecord, GranaryError> {
    let timestamp = match raw.timestamp.as_deref() {
        Some(value) => Some(parse_timestamp(value)?),
        None => None,
    };

    let (day, month, year) = match timestamp {
        Some(date) => {
            let (d, m, y) = date_partition(date);
            (Some(d), Some(m), Some(y))
        }
        None => (None, None, None),
    };

    Ok(SaleRecord {
        timestamp,
        day,
        month,
        year,
        // A literal NaN cell decodes as Some(NaN); it loads as NULL like
        // any other missing price.
        price: raw.price.filter(|p| p.is_finite()),
        user_id: raw.user_id,
        processed_date,
    })
}
