use crate::db::{SaleRecord, SalesStore};
use crate::error::GranaryError;
use crate::etl::extract::micro_batches;
use crate::etl::load::load_row;
use crate::etl::transform::enrich;
use crate::logging::METRICS_TARGET;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info};

/// Running price aggregates over every row seen so far.
///
/// Rows without a price count toward row totals but leave the aggregates
/// untouched, so sum/avg/min/max stay absent until the first priced row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceStats {
    valid_count: u64,
    sum: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, price: Option<f64>) {
        let Some(p) = price else { return };
        self.sum += p;
        self.valid_count += 1;
        self.min = Some(self.min.map_or(p, |m| m.min(p)));
        self.max = Some(self.max.map_or(p, |m| m.max(p)));
    }

    /// Number of priced rows recorded.
    pub fn valid_count(&self) -> u64 {
        self.valid_count
    }

    pub fn sum(&self) -> Option<f64> {
        (self.valid_count > 0).then_some(self.sum)
    }

    pub fn avg(&self) -> Option<f64> {
        (self.valid_count > 0).then(|| self.sum / self.valid_count as f64)
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }
}

/// What a completed run did, for the closing log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSummary {
    pub files_processed: usize,
    pub total_rows: u64,
    pub stats: PriceStats,
}

/// Process `files` in order: read each as micro-batches of `chunk_size`
/// records, enrich every record with its batch's processing stamp, load it
/// into the store, and emit one `METRICS_TARGET` event per loaded row.
///
/// Row totals and price aggregates span the whole run, not one file. The
/// first error aborts the run; batches already loaded stay loaded.
pub async fn run_data_pipeline(
    store: &SalesStore,
    files: &[PathBuf],
    chunk_size: usize,
) -> Result<PipelineSummary, GranaryError> {
    let mut total_rows: u64 = 0;
    let mut stats = PriceStats::new();

    for path in files {
        info!(file = %path.display(), "processing file");
        let mut file_rows: u64 = 0;

        for (n, batch) in micro_batches(path, chunk_size)?.enumerate() {
            let batch = batch?;
            let batch_no = n + 1;
            debug!(
                file = %path.display(),
                microbatch = batch_no,
                records = batch.len(),
                "processing microbatch"
            );

            // One stamp per micro-batch, shared by all its rows.
            let processed_date = Utc::now().naive_utc();
            let rows: Vec<SaleRecord> = batch
                .iter()
                .map(|raw| enrich(raw, processed_date))
                .collect::<Result<_, _>>()?;

            for row in &rows {
                total_rows += 1;
                file_rows += 1;
                stats.record(row.price);

                load_row(store, row).await?;

                info!(
                    target: METRICS_TARGET,
                    file = %path.display(),
                    microbatch = batch_no,
                    file_rows,
                    row_price = row.price,
                    total_rows,
                    sum_price = stats.sum(),
                    avg_price = stats.avg(),
                    min_price = stats.min(),
                    max_price = stats.max(),
                    "row metrics"
                );
            }

            debug!(file = %path.display(), microbatch = batch_no, "microbatch processed");
        }

        info!(file = %path.display(), rows = file_rows, "file processed");
    }

    Ok(PipelineSummary {
        files_processed: files.len(),
        total_rows,
        stats,
    })
}
