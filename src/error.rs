// Error taxonomy: validation failures are per-request and recoverable;
// a bad capacity is a configuration bug and is rejected before the store exists.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("history capacity must be > 0")]
    InvalidCapacity,
}

#[derive(Debug, Error, PartialEq)]
pub enum IngestError {
    #[error("client_id must be non-empty")]
    EmptyClientId,

    #[error("timestamp_unix must be positive, got {0}")]
    InvalidTimestamp(i64),

    #[error("{field} used_percent must be within [0, 100], got {value}")]
    PercentOutOfRange { field: String, value: f64 },

    #[error("ram available_bytes {available} exceeds total_bytes {total}")]
    AvailableExceedsTotal { available: u64, total: u64 },
}
