use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::client::error::FetchError;
use crate::domain::series::SeriesError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Rejected before anything was fetched.
    #[error("invalid graph request: {0}")]
    InvalidRequest(String),

    #[error("failed to retrieve graph data for {hostname}.{identifier}: {source}")]
    Fetch {
        hostname: String,
        identifier: String,
        #[source]
        source: FetchError,
    },

    /// A member of a group could not be summed into the others.
    #[error("cannot aggregate {hostname}.{identifier} into group {group:?}: {source}")]
    IncompatibleSeries {
        group: String,
        hostname: String,
        identifier: String,
        #[source]
        source: SeriesError,
    },

    /// The backend returned a sample that cannot be placed on the time axis.
    #[error("unplottable sample from {hostname}.{identifier} {name:?}: timestamp {timestamp} is outside the nanosecond range")]
    UnplottableSample {
        hostname: String,
        identifier: String,
        name: String,
        timestamp: DateTime<Utc>,
    },
}
