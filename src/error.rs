use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum GranaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV decode error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("exclude_validation and only_validation cannot be enabled at the same time")]
    FilterConflict,

    #[error("chunk_size must be at least 1")]
    InvalidChunkSize,

    #[error("invalid timestamp {value:?}: {source}")]
    DateParse {
        value: String,
        source: chrono::format::ParseError,
    },
}
