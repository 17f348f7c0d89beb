//! Database module: models, schema and MySQL storage for loaded rows.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring table rows
//! - `schema.rs`: SQL DDL for initializing the target table
//! - `mysql.rs`: connection setup and the `SalesStore` operations

pub mod models;
pub mod mysql;
pub mod schema;

pub use models::SaleRecord;
pub use mysql::{MySqlPool, SalesStore, connect};
