use crate::db::{SaleRecord, SalesStore};
use crate::error::GranaryError;

/// Load one enriched row into the target table. Absent fields land as
/// NULL through the store's binds.
pub async fn load_row(store: &SalesStore, row: &SaleRecord) -> Result<(), GranaryError> {
    store.insert_row(row).await
}
