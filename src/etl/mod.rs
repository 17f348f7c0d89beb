//! Extract, transform and load steps for the micro-batch pipeline.

pub mod extract;
pub mod load;
pub mod transform;

pub use extract::{MicroBatches, RawRecord, list_data_files, micro_batches};
pub use transform::enrich;
