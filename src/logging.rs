use crate::error::GranaryError;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Event target reserved for per-row pipeline measurements.
pub const METRICS_TARGET: &str = "metrics";

/// Install the subscriber stack: console output plus two files under
/// `log_dir`, both truncated on startup. `granary.log` carries diagnostics,
/// `metrics.log` carries one JSON line per `METRICS_TARGET` event.
///
/// `RUST_LOG` overrides `loglevel` when set; otherwise metrics stay at
/// `info` independent of the diagnostic level.
pub fn init(log_dir: &Path, loglevel: &str) -> Result<(), GranaryError> {
    std::fs::create_dir_all(log_dir)?;
    let diag_file = Arc::new(File::create(log_dir.join("granary.log"))?);
    let metrics_file = Arc::new(File::create(log_dir.join("metrics.log"))?);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{loglevel},{METRICS_TARGET}=info")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(diag_file)
                .with_filter(filter_fn(|meta| meta.target() != METRICS_TARGET)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(metrics_file)
                .with_filter(filter_fn(|meta| meta.target() == METRICS_TARGET)),
        )
        .init();

    Ok(())
}
