use mimalloc::MiMalloc;
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &granary::config::CONFIG;

    granary::logging::init(&cfg.log_dir, &cfg.loglevel)?;

    info!(
        db_host = %cfg.db_host,
        db_name = %cfg.db_name,
        table = %cfg.table_name,
        data_dir = %cfg.data_dir.display(),
        chunk_size = cfg.chunk_size,
        exclude_validation = cfg.exclude_validation,
        only_validation = cfg.only_validation
    );

    let pool = granary::db::connect(cfg).await?;
    let store = granary::db::SalesStore::new(pool, cfg.table_name.clone());
    store.init_schema().await?;
    info!(table = %cfg.table_name, "database ready");

    let files =
        granary::etl::list_data_files(&cfg.data_dir, cfg.exclude_validation, cfg.only_validation)?;
    if files.is_empty() {
        info!(path = %cfg.data_dir.display(), "no data files discovered");
        return Ok(());
    }
    info!(
        path = %cfg.data_dir.display(),
        count = files.len(),
        "processing data files"
    );

    let summary = granary::pipeline::run_data_pipeline(&store, &files, cfg.chunk_size).await?;

    info!(
        files = summary.files_processed,
        rows = summary.total_rows,
        priced_rows = summary.stats.valid_count(),
        avg_price = summary.stats.avg(),
        "pipeline finished"
    );

    Ok(())
}
