//! SQL DDL for initializing the load target.

/// MySQL schema for the sales table:
/// - `timestamp` DATE plus its `day`/`month`/`year` partition columns
/// - `price` DOUBLE and `user_id` BIGINT as carried by the source files
/// - `processed_date` DATETIME, stamped per micro-batch, never NULL
///
/// The table name comes from configuration. No primary key: the table is
/// an append-only load target and source rows carry no natural key.
pub fn create_table_sql(table: &str) -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS {table} (
    timestamp DATE NULL,
    day INT NULL,
    month INT NULL,
    year INT NULL,
    price DOUBLE NULL,
    user_id BIGINT NULL,
    processed_date DATETIME NOT NULL
)
"#
    )
}
