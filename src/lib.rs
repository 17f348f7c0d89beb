pub mod config;
pub mod db;
pub mod error;
pub mod etl;
pub mod logging;
pub mod pipeline;

pub use error::GranaryError;
pub use pipeline::{PipelineSummary, PriceStats, run_data_pipeline};
