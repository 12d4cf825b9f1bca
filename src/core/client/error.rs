use std::time::Duration;

use thiserror::Error;

/// Failures talking to the telemetry backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The backend answered, but not with a time-series.
    #[error("TIMESERIES did not return a time-series but {found}")]
    NotATimeSeries { found: &'static str },

    /// The backend reported an error for the query.
    #[error("backend error: {0}")]
    Backend(String),

    /// The backend rejected the request with a non-success HTTP status.
    #[error("query {query:?} failed with status {status}: {body}")]
    Status {
        query: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response.
    #[error("query {query:?}: {message}")]
    Transport { query: String, message: String },

    /// The response could not be decoded.
    #[error("failed to unmarshal response: {0}")]
    Protocol(String),

    #[error("connection pool closed")]
    PoolClosed,

    #[error("query {query:?} timed out after {timeout:?}")]
    Timeout { query: String, timeout: Duration },
}
