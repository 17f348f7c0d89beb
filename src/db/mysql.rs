use crate::config::Config;
use crate::db::models::SaleRecord;
use crate::db::schema::create_table_sql;
use crate::error::GranaryError;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::mysql::{MySqlConnectOptions, MySqlRow};
use sqlx::{MySql, Pool, Row};

pub type MySqlPool = Pool<MySql>;

/// Open a connection pool against the server described by the `DB_*`
/// settings.
pub async fn connect(cfg: &Config) -> Result<MySqlPool, GranaryError> {
    let opts = MySqlConnectOptions::new()
        .host(&cfg.db_host)
        .port(cfg.db_port)
        .username(&cfg.db_user)
        .password(&cfg.db_password)
        .database(&cfg.db_name);
    let pool = MySqlPool::connect_with(opts).await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct SalesStore {
    pool: MySqlPool,
    table: String,
}

impl SalesStore {
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Create the target table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), GranaryError> {
        let ddl = create_table_sql(&self.table);
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a single row. Absent fields load as NULL.
    pub async fn insert_row(&self, row: &SaleRecord) -> Result<(), GranaryError> {
        let sql = self.insert_sql();
        sqlx::query(&sql)
            .bind(row.timestamp)
            .bind(row.day)
            .bind(row.month)
            .bind(row.year)
            .bind(row.price)
            .bind(row.user_id)
            .bind(row.processed_date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Batch insert using a single transaction. Either every row in the
    /// slice lands or none does.
    pub async fn insert_rows(&self, rows: &[SaleRecord]) -> Result<(), GranaryError> {
        let sql = self.insert_sql();
        let mut tx = self.pool.begin().await?;

        for row in rows {
            sqlx::query(&sql)
                .bind(row.timestamp)
                .bind(row.day)
                .bind(row.month)
                .bind(row.year)
                .bind(row.price)
                .bind(row.user_id)
                .bind(row.processed_date)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, GranaryError> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.table);
        let n: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(n)
    }

    /// Fetch up to `limit` rows, most recently processed first.
    pub async fn fetch_recent(&self, limit: u32) -> Result<Vec<SaleRecord>, GranaryError> {
        let sql = format!(
            "SELECT timestamp, day, month, year, price, user_id, processed_date \
             FROM {} ORDER BY processed_date DESC LIMIT ?",
            self.table
        );
        let rows = sqlx::query(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn truncate(&self) -> Result<(), GranaryError> {
        let sql = format!("TRUNCATE TABLE {}", self.table);
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn drop_table(&self) -> Result<(), GranaryError> {
        let sql = format!("DROP TABLE IF EXISTS {}", self.table);
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} (timestamp, day, month, year, price, user_id, processed_date) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            self.table
        )
    }

    fn row_to_model(row: MySqlRow) -> Result<SaleRecord, GranaryError> {
        let timestamp: Option<NaiveDate> = row.try_get("timestamp")?;
        let day: Option<i32> = row.try_get("day")?;
        let month: Option<i32> = row.try_get("month")?;
        let year: Option<i32> = row.try_get("year")?;
        let price: Option<f64> = row.try_get("price")?;
        let user_id: Option<i64> = row.try_get("user_id")?;
        let processed_date: NaiveDateTime = row.try_get("processed_date")?;

        Ok(SaleRecord {
            timestamp,
            day,
            month,
            year,
            price,
            user_id,
            processed_date,
        })
    }
}
