use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Reasons two series cannot be put on a common grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    #[error("mismatching data sources: {left:?} != {right:?}")]
    MismatchedSources {
        left: Vec<String>,
        right: Vec<String>,
    },

    #[error("non-overlapping ranges: [{left_start}, {left_end}] <-> [{right_start}, {right_end}]")]
    NonOverlappingRange {
        left_start: DateTime<Utc>,
        left_end: DateTime<Utc>,
        right_start: DateTime<Utc>,
        right_end: DateTime<Utc>,
    },

    #[error("invalid value count for {name:?}: {left} != {right}")]
    InvalidValueCount {
        name: String,
        left: usize,
        right: usize,
    },

    #[error("mismatching steps sizes for {name:?}: {left} != {right}")]
    MismatchedStep {
        name: String,
        left: TimeDelta,
        right: TimeDelta,
    },

    #[error("window of {name:?} ends off its grid: index {index} requested, {available} points available")]
    TruncatedSeries {
        name: String,
        index: usize,
        available: usize,
    },
}

/// Failures of the aggregation step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("incompatible time-series: {0}")]
    IncompatibleSeries(#[source] AlignError),

    #[error("misaligned time-series {name:?} at index {index}: {left} != {right}")]
    MisalignedSeries {
        name: String,
        index: usize,
        left: DateTime<Utc>,
        right: DateTime<Utc>,
    },

    #[error("misaligned time-series {name:?}: {left} points != {right} points")]
    PointCountMismatch {
        name: String,
        left: usize,
        right: usize,
    },
}
