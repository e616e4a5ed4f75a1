use thiserror::Error;

/// Fatal collection failures: a missing table, a missing column, or a
/// structurally malformed source. These abort the current run immediately;
/// no partial result is meaningful.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("table not found: {0}")]
    MissingTable(String),
    #[error("table {table} is missing column: {column}")]
    MissingColumn { table: String, column: String },
    #[error("table {table} row {row}: {message}")]
    MalformedCell {
        table: String,
        row: usize,
        message: String,
    },
    #[error("no row with robot game rank {rank}; ranks 1..={count} must all be present")]
    MissingRank { rank: u32, count: u32 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, CollectError>;
