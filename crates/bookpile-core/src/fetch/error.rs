//! Per-entry fetch error type.
//!
//! One entry failing never aborts the run; the error is logged, counted,
//! and the loop moves on. The variants exist so the log line says what
//! actually went wrong (curl transport, HTTP status, or local disk).

use thiserror::Error;

/// Error from fetching a single manifest entry. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error("transfer failed: {0}")]
    Curl(#[from] curl::Error),

    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),

    /// Disk write failed (e.g. disk full, permission denied).
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
