use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single sample of a sub-series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// A time window plus one or more named point sequences.
///
/// `start`/`end` are the authoritative window for every sub-series. Points
/// are assumed to sit on a constant-step grid spanning that window, so the
/// step of a sub-series with `n > 1` points is `(end - start) / (n - 1)`.
///
/// Sub-series are kept in a `BTreeMap`, which makes every iteration over
/// them ordered by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub data: BTreeMap<String, Vec<DataPoint>>,
}

impl Series {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            data: BTreeMap::new(),
        }
    }

    /// Builder-style helper used by clients and tests to attach a sub-series.
    pub fn with_sub_series(mut self, name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        self.data.insert(name.into(), points);
        self
    }

    pub fn names(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }

    pub fn span(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Number of points in the named sub-series (0 if absent).
    pub fn len_of(&self, name: &str) -> usize {
        self.data.get(name).map(Vec::len).unwrap_or(0)
    }

    /// The grid step implied by the window and the point count, or `None` for
    /// degenerate (zero or one point) sub-series.
    pub fn step_of(&self, name: &str) -> Option<TimeDelta> {
        let len = self.len_of(name);
        if len <= 1 {
            return None;
        }
        Some(TimeDelta::nanoseconds(nanos(self.span()) / (len as i64 - 1)))
    }
}

/// Saturating conversion of a duration to whole nanoseconds.
pub(crate) fn nanos(delta: TimeDelta) -> i64 {
    delta.num_nanoseconds().unwrap_or(if delta < TimeDelta::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 1, 1, hour, min, 0).unwrap()
    }

    /// One-minute grid starting at `hour:min`, one point per value.
    pub fn minute_series(hour: u32, min: u32, values: &[f64]) -> Series {
        minute_series_named("value", hour, min, values)
    }

    pub fn minute_series_named(name: &str, hour: u32, min: u32, values: &[f64]) -> Series {
        let start = at(hour, min);
        let points: Vec<DataPoint> = values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(start + TimeDelta::minutes(i as i64), *v))
            .collect();
        let end = start + TimeDelta::minutes(values.len().saturating_sub(1) as i64);
        Series::new(start, end).with_sub_series(name, points)
    }
}
